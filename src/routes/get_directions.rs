use crate::{
    finder::sources::{RouteError, RouteProvider},
    types::{app_state::AppState, coordinate::Coordinate, food_spot::RouteSummary},
    utils::{app_error::AppError, validated_query::ValidatedQuery, validators::finite},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetDirectionsPayload {
    #[validate(
        range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"),
        custom(function = "finite")
    )]
    pub from_lat: f64,
    #[validate(
        range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"),
        custom(function = "finite")
    )]
    pub from_lon: f64,
    #[validate(
        range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"),
        custom(function = "finite")
    )]
    pub to_lat: f64,
    #[validate(
        range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"),
        custom(function = "finite")
    )]
    pub to_lon: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetDirectionsResponse {
    pub data: RouteSummary,
}

pub async fn get_directions(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetDirectionsPayload>,
) -> Result<Response, AppError> {
    let from = Coordinate::new(payload.from_lat, payload.from_lon);
    let to = Coordinate::new(payload.to_lat, payload.to_lon);

    let summary = state
        .routing_service
        .route(&from, &to)
        .await
        .map_err(|e| match e {
            RouteError::NoRoute => AppError::new(StatusCode::NOT_FOUND, "No route found"),
            RouteError::NothingSelected => {
                AppError::new(StatusCode::BAD_REQUEST, "No destination selected")
            }
            RouteError::Failed(e) => {
                error!("Failed to fetch directions: {}", e);
                AppError::new(StatusCode::BAD_GATEWAY, "Failed to fetch directions")
            }
        })?;

    Ok((StatusCode::OK, Json(GetDirectionsResponse { data: summary })).into_response())
}
