use async_trait::async_trait;
use tracing::{debug, error};

use super::types::{
    osrm_route_response::OsrmRouteResponse, routing_service_error::RoutingServiceError,
};
use crate::{
    finder::sources::{RouteError, RouteProvider},
    types::{coordinate::Coordinate, food_spot::RouteSummary},
};

#[derive(Clone)]
pub struct RoutingServiceConfig {
    pub host: String,
}

#[derive(Clone)]
pub struct RoutingService {
    config: RoutingServiceConfig,
    client: reqwest::Client,
}

impl RoutingService {
    pub fn new(config: RoutingServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<RouteSummary, RoutingServiceError> {
        // OSRM wants lon,lat pairs
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.config.host.trim_end_matches('/'),
            from.longitude,
            from.latitude,
            to.longitude,
            to.latitude
        );

        debug!("Requesting route: {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RoutingServiceError::Request(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| RoutingServiceError::Body(e.to_string()))?;

        // OSRM reports NoRoute with a 400, so look at the body before the status
        let parsed = match serde_json::from_str::<OsrmRouteResponse>(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(RoutingServiceError::Status(status.as_u16()))
            }
            Err(e) => return Err(RoutingServiceError::Body(e.to_string())),
        };

        match parsed.code.as_str() {
            "Ok" => parsed
                .routes
                .first()
                .map(|r| RouteSummary::new(r.distance, r.duration))
                .ok_or(RoutingServiceError::NoRoute),
            "NoRoute" | "NoSegment" => Err(RoutingServiceError::NoRoute),
            _ => Err(RoutingServiceError::Upstream(parsed.code)),
        }
    }
}

#[async_trait]
impl RouteProvider for RoutingService {
    async fn route(&self, from: &Coordinate, to: &Coordinate) -> Result<RouteSummary, RouteError> {
        self.get_route(from, to).await.map_err(|e| match e {
            RoutingServiceError::NoRoute => RouteError::NoRoute,
            e => {
                error!("Failed to fetch route: {}", e);
                RouteError::Failed(e.to_string())
            }
        })
    }
}
