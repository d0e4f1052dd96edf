use async_trait::async_trait;
use tracing::{debug, error};
use urlencoding::encode;

use super::types::{
    overpass_response::OverpassResponse, overpass_service_error::OverpassServiceError,
};
use crate::{
    finder::sources::{PoiSource, PoiSourceError},
    types::{coordinate::Coordinate, food_spot::RawPointOfInterest},
};

pub const SEARCH_RADIUS_METERS: u32 = 2000;

#[derive(Clone)]
pub struct OverpassServiceConfig {
    pub host: String,
}

#[derive(Clone)]
pub struct OverpassService {
    config: OverpassServiceConfig,
    client: reqwest::Client,
}

pub fn restaurant_query(center: &Coordinate) -> String {
    format!(
        r#"[out:json];(node["amenity"="restaurant"](around:{},{},{}););out;"#,
        SEARCH_RADIUS_METERS, center.latitude, center.longitude
    )
}

impl OverpassService {
    pub fn new(config: OverpassServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_restaurants(
        &self,
        center: &Coordinate,
    ) -> Result<OverpassResponse, OverpassServiceError> {
        let url = format!(
            "{}/api/interpreter?data={}",
            self.config.host.trim_end_matches('/'),
            encode(&restaurant_query(center))
        );

        debug!("Querying overpass: {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OverpassServiceError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(OverpassServiceError::Status(resp.status().as_u16()));
        }

        resp.json::<OverpassResponse>()
            .await
            .map_err(|e| OverpassServiceError::Body(e.to_string()))
    }
}

#[async_trait]
impl PoiSource for OverpassService {
    async fn nearby_restaurants(
        &self,
        center: &Coordinate,
    ) -> Result<Vec<RawPointOfInterest>, PoiSourceError> {
        let body = self.get_restaurants(center).await.map_err(|e| {
            error!("Failed to fetch restaurants from overpass: {}", e);
            PoiSourceError(e.to_string())
        })?;

        Ok(body
            .elements
            .into_iter()
            .map(|e| RawPointOfInterest {
                id: e.id.into(),
                coordinate: e.lat.zip(e.lon).map(Coordinate::from),
                tags: e.tags,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;

    fn service(host: String) -> OverpassService {
        OverpassService::new(OverpassServiceConfig { host })
    }

    #[tokio::test]
    #[traced_test]
    async fn sends_the_restaurant_query() {
        let mut mock_server = mockito::Server::new_async().await;
        let center = Coordinate::new(40.7128, -74.006);

        let mock = mock_server
            .mock("GET", "/api/interpreter")
            .match_query(mockito::Matcher::UrlEncoded(
                "data".to_string(),
                restaurant_query(&center),
            ))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "elements": [
                        {
                            "id": 101,
                            "lat": 40.713,
                            "lon": -74.007,
                            "tags": { "name": "Joe's", "cuisine": "pizza" }
                        },
                        { "id": 102, "lat": 40.714, "lon": -74.005 }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let pois = service(mock_server.url())
            .nearby_restaurants(&center)
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].tag("name"), Some("Joe's"));
        assert_eq!(pois[0].coordinate, Some(Coordinate::new(40.713, -74.007)));
        assert!(pois[1].tags.is_empty());
    }

    #[test]
    fn query_uses_radius_and_center() {
        assert_eq!(
            restaurant_query(&Coordinate::new(51.5, -0.12)),
            r#"[out:json];(node["amenity"="restaurant"](around:2000,51.5,-0.12););out;"#
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn error_status_is_a_failure() {
        let mut mock_server = mockito::Server::new_async().await;

        mock_server
            .mock("GET", "/api/interpreter")
            .match_query(mockito::Matcher::Any)
            .with_status(504)
            .create_async()
            .await;

        let result = service(mock_server.url())
            .get_restaurants(&Coordinate::new(0.0, 0.0))
            .await;

        assert!(matches!(result, Err(OverpassServiceError::Status(504))));
    }

    #[tokio::test]
    #[traced_test]
    async fn garbage_body_is_a_failure() {
        let mut mock_server = mockito::Server::new_async().await;

        mock_server
            .mock("GET", "/api/interpreter")
            .match_query(mockito::Matcher::Any)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let result = service(mock_server.url())
            .nearby_restaurants(&Coordinate::new(0.0, 0.0))
            .await;

        assert!(result.is_err());
    }
}
