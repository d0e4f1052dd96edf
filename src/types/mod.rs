pub mod app_state;
pub mod coordinate;
pub mod food_spot;
