use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
