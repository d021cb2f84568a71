use crate::overpass::error::OverpassError;
use crate::render::error::RenderError;

#[derive(thiserror::Error, Debug)]
pub enum SubwayMapError {
    #[error("Overpass error: {0}")]
    Overpass(#[from] OverpassError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SubwayMapResult<T> = Result<T, SubwayMapError>;
