use super::error::{RenderError, RenderResult};
use super::escape_js;
use crate::network::graph::RouteGraph;

/// Line colour when a connection's endpoints disagree on their route
/// colour.
const NEUTRAL_LINE_COLOUR: &str = "#808080";

/// Self-contained interactive map document, centred on the arithmetic
/// mean of all station positions. One marker per station with a name
/// tooltip; one line per connection with both endpoints resolved,
/// coloured by the shared endpoint colour when the stations agree.
pub fn render_map(graph: &RouteGraph, zoom: u32) -> RenderResult<String> {
    if graph.station_count() == 0 {
        return Err(RenderError::EmptyGraph);
    }

    let count = graph.station_count() as f64;
    let center_lat = graph
        .stations()
        .map(|station| station.position.y())
        .sum::<f64>()
        / count;
    let center_lon = graph
        .stations()
        .map(|station| station.position.x())
        .sum::<f64>()
        / count;

    let mut features = String::new();
    for station in graph.stations() {
        features.push_str(&format!(
            "    L.circleMarker([{}, {}], {{radius: 6, color: \"{}\", fill: true, fillColor: \"{}\"}}).bindTooltip(\"{}\").addTo(map);\n",
            station.position.y(),
            station.position.x(),
            station.colour,
            station.colour,
            escape_js(&station.name)
        ));
    }

    for (a, b) in graph.connections() {
        // Only a connection with both endpoints resolved has positions
        // to draw.
        if let (Some(from), Some(to)) = (graph.station(a), graph.station(b)) {
            let colour = if from.colour == to.colour {
                from.colour.as_str()
            } else {
                NEUTRAL_LINE_COLOUR
            };
            features.push_str(&format!(
                "    L.polyline([[{}, {}], [{}, {}]], {{color: \"{}\", weight: 2}}).addTo(map);\n",
                from.position.y(),
                from.position.x(),
                to.position.y(),
                to.position.x(),
                colour
            ));
        }
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Subway map</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>html, body, #map {{ margin: 0; height: 100%; }}</style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map("map").setView([{center_lat}, {center_lon}], {zoom});
    L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
      maxZoom: 19,
      attribution: "&copy; OpenStreetMap contributors"
    }}).addTo(map);

{features}  </script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod test {

    use geo::Point;

    use crate::network::graph::{RouteGraph, Station};

    use super::*;

    fn station(id: i64, lon: f64, lat: f64, name: &str, colour: &str) -> Station {
        Station {
            id,
            position: Point::new(lon, lat),
            name: name.to_string(),
            colour: colour.to_string(),
        }
    }

    #[test]
    fn test_render_map() {
        let mut graph = RouteGraph::default();
        graph.add_station(station(1, 13.0, 52.0, "Alpha", "#0000FF"));
        graph.add_station(station(2, 13.1, 52.1, "Beta", "#0000FF"));
        graph.add_connection(1, 2);

        let html = render_map(&graph, 12).unwrap();

        let expected_center = format!(
            "setView([{}, {}], 12)",
            (52.0f64 + 52.1) / 2.0,
            (13.0f64 + 13.1) / 2.0
        );
        assert!(html.contains(&expected_center));
        assert_eq!(html.matches("L.circleMarker").count(), 2);
        assert!(html.contains(".bindTooltip(\"Alpha\")"));
        assert_eq!(html.matches("L.polyline").count(), 1);
        assert!(html.contains("{color: \"#0000FF\", weight: 2}"));
    }

    #[test]
    fn test_render_map_mixed_colours_fall_back_to_neutral() {
        let mut graph = RouteGraph::default();
        graph.add_station(station(1, 13.0, 52.0, "Alpha", "#FF0000"));
        graph.add_station(station(2, 13.1, 52.1, "Beta", "#00FF00"));
        graph.add_connection(1, 2);

        let html = render_map(&graph, 12).unwrap();

        assert!(html.contains("{color: \"#808080\", weight: 2}"));
    }

    #[test]
    fn test_render_map_skips_unresolved_connections() {
        let mut graph = RouteGraph::default();
        graph.add_station(station(1, 13.0, 52.0, "Alpha", "#0000FF"));
        graph.add_connection(1, 99);

        let html = render_map(&graph, 12).unwrap();

        assert_eq!(html.matches("L.polyline").count(), 0);
    }

    #[test]
    fn test_render_map_empty_graph() {
        let result = render_map(&RouteGraph::default(), 12);

        assert!(matches!(result, Err(RenderError::EmptyGraph)));
    }
}
