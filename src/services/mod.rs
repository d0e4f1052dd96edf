pub mod overpass_client;
pub mod routing_client;
