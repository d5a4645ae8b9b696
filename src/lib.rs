//! Car Wash Simulation Library
//!
//! Simulates a fixed set of vehicles and washing stations: each round every
//! station selects a vehicle under its policy and removes dirt until every
//! vehicle is fully clean.

pub mod io;
pub mod simulation;
