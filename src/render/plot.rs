use geo::Point;
use itertools::Itertools;

use super::escape_xml;
use crate::network::graph::RouteGraph;

const WIDTH: f64 = 1500.0;
const HEIGHT: f64 = 800.0;
const MARGIN: f64 = 40.0;
const EDGE_COLOUR: &str = "#808080";

/// Scales geographic coordinates into the SVG viewport, latitude
/// growing upwards.
struct Projection {
    min_lon: f64,
    max_lon: f64,
    min_lat: f64,
    max_lat: f64,
}

impl Projection {
    fn fit(graph: &RouteGraph) -> Option<Projection> {
        let (min_lon, max_lon) = graph
            .stations()
            .map(|station| station.position.x())
            .minmax()
            .into_option()?;
        let (min_lat, max_lat) = graph
            .stations()
            .map(|station| station.position.y())
            .minmax()
            .into_option()?;

        Some(Projection {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        })
    }

    fn project(&self, position: Point<f64>) -> (f64, f64) {
        let span_lon = (self.max_lon - self.min_lon).max(f64::EPSILON);
        let span_lat = (self.max_lat - self.min_lat).max(f64::EPSILON);

        let x = MARGIN + (position.x() - self.min_lon) / span_lon * (WIDTH - 2.0 * MARGIN);
        let y = HEIGHT - MARGIN - (position.y() - self.min_lat) / span_lat * (HEIGHT - 2.0 * MARGIN);
        (x, y)
    }
}

/// Static figure: stations at their geographic coordinates, uniformly
/// styled connections underneath, coloured markers and name labels on
/// top. An empty graph renders a blank titled canvas.
pub fn render_plot(graph: &RouteGraph, title: &str) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">\n",
        WIDTH, HEIGHT, WIDTH, HEIGHT
    ));
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"white\" />\n");
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"24\" font-size=\"16\" text-anchor=\"middle\">{}</text>\n",
        WIDTH / 2.0,
        escape_xml(title)
    ));

    if let Some(projection) = Projection::fit(graph) {
        for (a, b) in graph.connections() {
            if let (Some(from), Some(to)) = (graph.station(a), graph.station(b)) {
                let (x1, y1) = projection.project(from.position);
                let (x2, y2) = projection.project(to.position);
                svg.push_str(&format!(
                    "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-opacity=\"0.7\" stroke-width=\"1.5\" />\n",
                    x1, y1, x2, y2, EDGE_COLOUR
                ));
            }
        }

        for station in graph.stations() {
            let (x, y) = projection.project(station.position);
            svg.push_str(&format!(
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"5\" fill=\"{}\" />\n",
                x, y, station.colour
            ));
            svg.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"8\" text-anchor=\"middle\">{}</text>\n",
                x,
                y - 8.0,
                escape_xml(&station.name)
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}
