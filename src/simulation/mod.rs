//! Standalone car wash simulation module
//!
//! Contains the core simulation logic: vehicles, washing stations with their
//! selection policies, and the engine that runs rounds until every vehicle
//! is clean. It has no knowledge of where the input comes from or where the
//! results go.

mod engine;
mod station;
mod types;
mod vehicle;

pub use engine::{RunReport, SimEngine, VehicleResult};
pub use station::{SelectionPolicy, WashStation};
pub use types::{
    StationId, VehicleId, INITIAL_CLEANING_LEVEL, RANDOMIZED_DECAY, SEQUENTIAL_DECAY,
};
pub use vehicle::SimVehicle;
