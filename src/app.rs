use std::env::VarError;

use crate::{
    routes::apply_routes,
    services::{
        overpass_client::overpass_service::{OverpassService, OverpassServiceConfig},
        routing_client::routing_service::{RoutingService, RoutingServiceConfig},
    },
    types::app_state::AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub overpass_host: String,
    pub routing_host: String,
    pub image_host: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Every setting has a public default, so lookups only ever override.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let or_default = |key: &str, default: &str| -> String {
            lookup(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            overpass_host: or_default("OVERPASS_HOST", "https://overpass-api.de"),
            routing_host: or_default("ROUTING_HOST", "https://router.project-osrm.org"),
            image_host: or_default("IMAGE_HOST", "https://source.unsplash.com"),
            bind_addr: or_default("BIND_ADDR", "0.0.0.0:3000"),
        }
    }
}

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::permissive();
    let state = AppState {
        overpass_service: OverpassService::new(OverpassServiceConfig {
            host: config.overpass_host,
        }),
        routing_service: RoutingService::new(RoutingServiceConfig {
            host: config.routing_host,
        }),
        image_host: config.image_host,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "ChopLocator is running"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub overpass_server: mockito::ServerGuard,
    pub routing_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let overpass_server = mockito::Server::new_async().await;
    let routing_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        overpass_host: overpass_server.url(),
        routing_host: routing_server.url(),
        image_host: "https://images.test".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    });

    MockApp {
        app,
        overpass_server,
        routing_server,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn root_responds() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn config_defaults() {
        let config = AppConfig::from_lookup(|_| Err(VarError::NotPresent));

        assert_eq!(config.overpass_host, "https://overpass-api.de");
        assert_eq!(config.routing_host, "https://router.project-osrm.org");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn config_overrides() {
        let vars = HashMap::from([
            ("OVERPASS_HOST", "http://localhost:12345"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("IMAGE_HOST", ""),
        ]);

        let config = AppConfig::from_lookup(|key| {
            vars.get(key)
                .map(|v| v.to_string())
                .ok_or(VarError::NotPresent)
        });

        assert_eq!(config.overpass_host, "http://localhost:12345");
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.image_host, "https://source.unsplash.com");
    }
}
