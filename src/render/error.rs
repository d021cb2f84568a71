#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Graph has no positioned stations")]
    EmptyGraph,
}

pub type RenderResult<T> = Result<T, RenderError>;
