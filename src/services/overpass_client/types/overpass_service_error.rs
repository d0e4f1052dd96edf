use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverpassServiceError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Overpass responded with status {0}")]
    Status(u16),
    #[error("Failed to get response body: {0}")]
    Body(String),
}
