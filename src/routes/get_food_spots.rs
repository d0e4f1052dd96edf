use crate::{
    finder::{session::FinderSession, sources::ClientReportedLocation},
    types::{
        app_state::AppState,
        coordinate::Coordinate,
        food_spot::RankedSpot,
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery, validators::finite},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetFoodSpotsPayload {
    #[validate(
        range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"),
        custom(function = "finite")
    )]
    pub lat: Option<f64>,

    #[validate(
        range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"),
        custom(function = "finite")
    )]
    pub lon: Option<f64>,
}

impl GetFoodSpotsPayload {
    fn reported_location(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.lat?, self.lon?))
    }
}

#[derive(Serialize, Deserialize)]
pub struct GetFoodSpotsResponseData {
    pub user_location: Coordinate,
    pub spots: Vec<RankedSpot>,
}

#[derive(Serialize, Deserialize)]
pub struct GetFoodSpotsResponse {
    pub data: GetFoodSpotsResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_food_spots(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetFoodSpotsPayload>,
) -> Result<Response, AppError> {
    let mut session = FinderSession::new(state.image_host.clone());

    let user_location = session
        .locate(&ClientReportedLocation(payload.reported_location()))
        .await
        .map_err(|_| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Unable to get your location",
            )
        })?;

    let snapshot = session.search(&state.overpass_service).await;

    if let Some(e) = &snapshot.query_error {
        error!("Failed to fetch nearby restaurants: {}", e);
        return Err(AppError::new(
            StatusCode::BAD_GATEWAY,
            "Failed to fetch nearby restaurants",
        ));
    }

    info!(count = snapshot.spots.len(), "ranked nearby restaurants");

    Ok((
        StatusCode::OK,
        Json(GetFoodSpotsResponse {
            data: GetFoodSpotsResponseData {
                user_location,
                spots: snapshot.spots.clone(),
            },
        }),
    )
        .into_response())
}
