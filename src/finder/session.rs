//! Drives the finder through locate, search, select and route, one stage at
//! a time.
//!
//! Each stage holds its own [`CancellationToken`]. Starting a stage cancels
//! whatever the previous run of that stage still has in flight, and the
//! reducer drops results tagged with an outdated generation, so a slow
//! response can never overwrite a newer one.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::types::{coordinate::Coordinate, food_spot::SpotId};

use super::{
    ranker::rank_spots,
    sources::{LocationProvider, LocationUnavailable, PoiSource, RouteError, RouteProvider},
    state::{reduce, FinderEvent, FinderState},
};

pub struct FinderSession {
    state: FinderState,
    image_host: String,
    search_token: CancellationToken,
    route_token: CancellationToken,
}

/// A search that has been started but not yet applied to the session.
pub struct SearchTicket {
    generation: u64,
    center: Coordinate,
    image_host: String,
    token: CancellationToken,
}

impl SearchTicket {
    /// Queries `source` and returns the event to dispatch, or `None` if the
    /// search was superseded before it finished.
    pub async fn run(self, source: &dyn PoiSource) -> Option<FinderEvent> {
        let result = tokio::select! {
            biased;
            _ = self.token.cancelled() => return None,
            result = source.nearby_restaurants(&self.center) => result,
        };

        Some(match result {
            Ok(raw) => {
                debug!(count = raw.len(), "received points of interest");
                FinderEvent::SpotsLoaded {
                    generation: self.generation,
                    spots: rank_spots(&self.center, raw, &self.image_host),
                }
            }
            Err(e) => {
                warn!("Failed to fetch nearby restaurants: {}", e);
                FinderEvent::SpotsFailed {
                    generation: self.generation,
                    message: e.to_string(),
                }
            }
        })
    }
}

/// A route request that has been started but not yet applied.
pub struct RouteTicket {
    spot_id: SpotId,
    from: Coordinate,
    to: Coordinate,
    token: CancellationToken,
}

impl RouteTicket {
    /// `Ok(None)` when the selection changed before the route arrived.
    pub async fn run(self, router: &dyn RouteProvider) -> Result<Option<FinderEvent>, RouteError> {
        let summary = tokio::select! {
            biased;
            _ = self.token.cancelled() => return Ok(None),
            summary = router.route(&self.from, &self.to) => summary?,
        };

        Ok(Some(FinderEvent::RouteFound {
            spot_id: self.spot_id,
            from: self.from,
            summary,
        }))
    }
}

impl FinderSession {
    pub fn new(image_host: impl Into<String>) -> Self {
        Self {
            state: FinderState::default(),
            image_host: image_host.into(),
            search_token: CancellationToken::new(),
            route_token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &FinderState {
        &self.state
    }

    pub fn dispatch(&mut self, event: FinderEvent) -> &FinderState {
        self.state = reduce(&self.state, event);
        &self.state
    }

    /// Stage one. Anything still running for the previous location is
    /// cancelled, even when locating fails.
    pub async fn locate(
        &mut self,
        provider: &dyn LocationProvider,
    ) -> Result<Coordinate, LocationUnavailable> {
        Self::supersede(&mut self.search_token);
        Self::supersede(&mut self.route_token);

        match provider.locate().await {
            Ok(location) => {
                info!(
                    lat = location.latitude,
                    lon = location.longitude,
                    "location resolved"
                );
                self.dispatch(FinderEvent::LocationResolved(location));
                Ok(location)
            }
            Err(e) => {
                warn!("Unable to get user location: {}", e);
                self.dispatch(FinderEvent::LocationUnavailable(e.0.clone()));
                Err(e)
            }
        }
    }

    /// Starts stage two for the current location. Returns `None` when there
    /// is no location to search around.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let center = self.state.user_location?;
        if !self.state.loading {
            return None;
        }

        Self::supersede(&mut self.search_token);

        Some(SearchTicket {
            generation: self.state.generation,
            center,
            image_host: self.image_host.clone(),
            token: self.search_token.clone(),
        })
    }

    /// Runs stage two to completion and applies its outcome.
    pub async fn search(&mut self, source: &dyn PoiSource) -> &FinderState {
        if let Some(ticket) = self.begin_search() {
            if let Some(event) = ticket.run(source).await {
                self.dispatch(event);
            }
        }
        &self.state
    }

    /// Returns whether `id` is now the selected spot.
    pub fn select(&mut self, id: SpotId) -> bool {
        Self::supersede(&mut self.route_token);
        self.dispatch(FinderEvent::SpotSelected(id.clone()));
        self.state.selected.as_ref() == Some(&id)
    }

    /// Starts a route request from the user to the selected spot. Selecting
    /// another spot or relocating cancels it.
    pub fn begin_route(&mut self) -> Result<RouteTicket, RouteError> {
        let from = self
            .state
            .user_location
            .ok_or(RouteError::NothingSelected)?;
        let spot = self
            .state
            .selected_spot()
            .ok_or(RouteError::NothingSelected)?;
        let spot_id = spot.id.clone();
        let to = spot.coordinate.ok_or(RouteError::NoRoute)?;

        Self::supersede(&mut self.route_token);

        Ok(RouteTicket {
            spot_id,
            from,
            to,
            token: self.route_token.clone(),
        })
    }

    pub async fn route(&mut self, router: &dyn RouteProvider) -> Result<&FinderState, RouteError> {
        let ticket = self.begin_route()?;
        if let Some(event) = ticket.run(router).await? {
            self.dispatch(event);
        }
        Ok(&self.state)
    }

    fn supersede(token: &mut CancellationToken) {
        std::mem::replace(token, CancellationToken::new()).cancel();
    }
}
