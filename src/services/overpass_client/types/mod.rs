pub mod overpass_response;
pub mod overpass_service_error;
