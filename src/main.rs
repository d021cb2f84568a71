mod error;
mod network;
mod overpass;
mod render;

use std::env;
use std::fs;

use error::SubwayMapResult;
use network::classify::{index_nodes, select_routes};
use network::graph::build_graph;
use overpass::client::{subway_query, OverpassClient};

const DEFAULT_ENDPOINT: &str = "https://lz4.overpass-api.de/api/interpreter";
const DEFAULT_AREA: &str = "Berlin";
const DEFAULT_PLOT_PATH: &str = "subway_plot.svg";
const DEFAULT_MAP_PATH: &str = "subway_map.html";
const MAP_ZOOM: u32 = 12;

#[tokio::main(flavor = "current_thread")]
async fn main() -> SubwayMapResult<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::try_init().ok();

    dotenvy::from_filename(".env").ok();

    let endpoint = env::var("OVERPASS_URL").unwrap_or(DEFAULT_ENDPOINT.to_string());
    let area = env::var("SUBWAY_AREA").unwrap_or(DEFAULT_AREA.to_string());
    let plot_path = env::var("PLOT_OUTPUT").unwrap_or(DEFAULT_PLOT_PATH.to_string());
    let map_path = env::var("MAP_OUTPUT").unwrap_or(DEFAULT_MAP_PATH.to_string());

    let client = OverpassClient::new(&endpoint)?;

    log::info!("Fetching subway routes for {}", area);
    let collection = client.query(&subway_query(&area)).await?;
    log::info!("Got {} elements", collection.elements.len());

    let routes = select_routes(&collection.elements);
    let nodes = index_nodes(&collection.elements);
    log::info!("Classified {} routes and {} nodes", routes.len(), nodes.len());

    let graph = build_graph(&routes, &nodes);
    log::info!(
        "Built graph with {} stations and {} connections",
        graph.station_count(),
        graph.connection_count()
    );

    let plot = render::plot::render_plot(&graph, &format!("{} subway network", area));
    fs::write(&plot_path, plot)?;
    log::info!("Wrote plot to {}", plot_path);

    let map = render::map::render_map(&graph, MAP_ZOOM)?;
    fs::write(&map_path, map)?;
    log::info!("Wrote map to {}", map_path);

    Ok(())
}
