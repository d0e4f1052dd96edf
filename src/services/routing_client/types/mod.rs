pub mod osrm_route_response;
pub mod routing_service_error;
