//! Collaborators the finder depends on but does not own.

use async_trait::async_trait;

use crate::types::{
    coordinate::Coordinate,
    food_spot::{RawPointOfInterest, RouteSummary},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("location unavailable: {0}")]
pub struct LocationUnavailable(pub String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("points of interest query failed: {0}")]
pub struct PoiSourceError(pub String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("no route between the given points")]
    NoRoute,
    #[error("no location or no selected spot to route to")]
    NothingSelected,
    #[error("routing failed: {0}")]
    Failed(String),
}

/// Supplies the user's position once per search cycle.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinate, LocationUnavailable>;
}

/// Restaurants around a position.
#[async_trait]
pub trait PoiSource: Send + Sync {
    async fn nearby_restaurants(
        &self,
        center: &Coordinate,
    ) -> Result<Vec<RawPointOfInterest>, PoiSourceError>;
}

#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, from: &Coordinate, to: &Coordinate) -> Result<RouteSummary, RouteError>;
}

/// The position a client reported alongside its request. Clients that could
/// not obtain a fix send none.
pub struct ClientReportedLocation(pub Option<Coordinate>);

#[async_trait]
impl LocationProvider for ClientReportedLocation {
    async fn locate(&self) -> Result<Coordinate, LocationUnavailable> {
        self.0.ok_or_else(|| {
            LocationUnavailable("client did not report a position".to_string())
        })
    }
}
