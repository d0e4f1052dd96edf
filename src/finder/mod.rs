pub mod haversine;
pub mod ranker;
pub mod session;
pub mod sources;
pub mod state;
