use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_directions;
mod get_food_spots;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/food-spots", get(get_food_spots::get_food_spots))
        .route("/directions", get(get_directions::get_directions))
}
