//! Turns raw points of interest into the ranked list shown to the user.

use std::cmp::Ordering;

use crate::types::{
    coordinate::Coordinate,
    food_spot::{RankedSpot, RawPointOfInterest},
};

use super::haversine::haversine_miles;

pub const MAX_RANKED_SPOTS: usize = 10;

pub const FALLBACK_NAME: &str = "Unnamed Restaurant";
pub const FALLBACK_CATEGORY: &str = "Restaurant";
pub const FALLBACK_ADDRESS: &str = "Address not available";

/// Annotates every record with its distance from `user`, sorts ascending
/// (stable, unknown distances last) and keeps the closest
/// [`MAX_RANKED_SPOTS`].
pub fn rank_spots(
    user: &Coordinate,
    raw: Vec<RawPointOfInterest>,
    image_host: &str,
) -> Vec<RankedSpot> {
    let mut spots: Vec<RankedSpot> = raw
        .into_iter()
        .enumerate()
        .map(|(index, poi)| to_ranked_spot(user, poi, index, image_host))
        .collect();

    spots.sort_by(|a, b| compare_distance(a.distance_miles, b.distance_miles));
    spots.truncate(MAX_RANKED_SPOTS);

    spots
}

fn to_ranked_spot(
    user: &Coordinate,
    poi: RawPointOfInterest,
    index: usize,
    image_host: &str,
) -> RankedSpot {
    let distance_miles = poi
        .coordinate
        .map(|c| haversine_miles(user, &c))
        .unwrap_or(f64::NAN);

    RankedSpot {
        name: poi.tag("name").unwrap_or(FALLBACK_NAME).to_string(),
        category: poi.tag("cuisine").unwrap_or(FALLBACK_CATEGORY).to_string(),
        address: format_address(&poi),
        image: placeholder_image(image_host, index),
        coordinate: poi.coordinate,
        id: poi.id,
        distance_miles,
    }
}

fn format_address(poi: &RawPointOfInterest) -> String {
    match (poi.tag("addr:housenumber"), poi.tag("addr:street")) {
        (Some(number), Some(street)) => format!("{} {}", number, street),
        (None, Some(street)) => street.to_string(),
        (_, None) => FALLBACK_ADDRESS.to_string(),
    }
}

fn placeholder_image(image_host: &str, index: usize) -> String {
    format!(
        "{}/400x300/?restaurant,food&sig={}",
        image_host.trim_end_matches('/'),
        index
    )
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
