use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingServiceError {
    #[error("No route found")]
    NoRoute,
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Routing service responded with status {0}")]
    Status(u16),
    #[error("Routing service returned code {0}")]
    Upstream(String),
    #[error("Failed to get response body: {0}")]
    Body(String),
}
