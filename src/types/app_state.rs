use crate::services::{
    overpass_client::overpass_service::OverpassService,
    routing_client::routing_service::RoutingService,
};

#[derive(Clone)]
pub struct AppState {
    pub overpass_service: OverpassService,
    pub routing_service: RoutingService,
    pub image_host: String,
}
