//! Snapshot of everything a client renders, and the only function allowed to
//! move it forward.

use crate::types::{
    coordinate::Coordinate,
    food_spot::{RankedSpot, RouteSummary, SpotId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderPhase {
    Initializing,
    LocatingFailed,
    LoadingResults,
    ResultsReady,
    SpotSelected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinderState {
    pub user_location: Option<Coordinate>,
    pub location_error: Option<String>,
    /// Bumped on every location change; results tagged with an older value
    /// are stale.
    pub generation: u64,
    pub loading: bool,
    pub spots: Vec<RankedSpot>,
    /// Set when the last query failed, as opposed to succeeding with no spots.
    pub query_error: Option<String>,
    pub selected: Option<SpotId>,
    pub route: Option<RouteSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FinderEvent {
    LocationResolved(Coordinate),
    LocationUnavailable(String),
    SpotsLoaded {
        generation: u64,
        spots: Vec<RankedSpot>,
    },
    SpotsFailed {
        generation: u64,
        message: String,
    },
    SpotSelected(SpotId),
    RouteFound {
        spot_id: SpotId,
        from: Coordinate,
        summary: RouteSummary,
    },
}

impl FinderState {
    pub fn phase(&self) -> FinderPhase {
        match (&self.user_location, &self.location_error) {
            (None, Some(_)) => FinderPhase::LocatingFailed,
            (None, None) => FinderPhase::Initializing,
            _ if self.loading => FinderPhase::LoadingResults,
            _ if self.selected.is_some() => FinderPhase::SpotSelected,
            _ => FinderPhase::ResultsReady,
        }
    }

    pub fn selected_spot(&self) -> Option<&RankedSpot> {
        let id = self.selected.as_ref()?;
        self.spots.iter().find(|s| &s.id == id)
    }

    fn contains(&self, id: &SpotId) -> bool {
        self.spots.iter().any(|s| &s.id == id)
    }
}

pub fn reduce(state: &FinderState, event: FinderEvent) -> FinderState {
    let mut next = state.clone();

    match event {
        FinderEvent::LocationResolved(location) => {
            next.generation += 1;
            next.user_location = Some(location);
            next.location_error = None;
            next.loading = true;
            next.route = None;
        }
        FinderEvent::LocationUnavailable(message) => {
            next = FinderState {
                generation: state.generation + 1,
                location_error: Some(message),
                ..FinderState::default()
            };
        }
        FinderEvent::SpotsLoaded { generation, spots } => {
            if !accepts_results(state, generation) {
                return next;
            }
            next.loading = false;
            next.query_error = None;
            next.spots = spots;
            if let Some(id) = &state.selected {
                if !next.contains(id) {
                    next.selected = None;
                    next.route = None;
                }
            }
        }
        FinderEvent::SpotsFailed {
            generation,
            message,
        } => {
            if !accepts_results(state, generation) {
                return next;
            }
            next.loading = false;
            next.query_error = Some(message);
            next.spots = Vec::new();
            next.selected = None;
            next.route = None;
        }
        FinderEvent::SpotSelected(id) => {
            if state.contains(&id) {
                next.selected = Some(id);
                next.route = None;
            }
        }
        FinderEvent::RouteFound {
            spot_id,
            from,
            summary,
        } => {
            if state.selected.as_ref() == Some(&spot_id) && state.user_location == Some(from) {
                next.route = Some(summary);
            }
        }
    }

    next
}

fn accepts_results(state: &FinderState, generation: u64) -> bool {
    state.loading && state.generation == generation
}
