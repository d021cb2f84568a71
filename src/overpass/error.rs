use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum OverpassError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error response: {0}")]
    Status(StatusCode),

    #[error("Malformed data: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    Url(#[from] url::ParseError),
}

pub type OverpassResult<T> = Result<T, OverpassError>;
