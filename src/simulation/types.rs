//! Core types for the car wash simulation
//!
//! Standalone types shared by the vehicle, station and engine modules.

/// A unique identifier for a vehicle
/// This is a simple wrapper around a u32 for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub u32);

/// A unique identifier for a washing station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId(pub u32);

/// Cleaning capacity every station starts the run with
pub const INITIAL_CLEANING_LEVEL: f32 = 100.0;

/// Capacity a sequential station loses per wash performed
pub const SEQUENTIAL_DECAY: f32 = 20.0;

/// Capacity a randomized station loses per wash performed
pub const RANDOMIZED_DECAY: f32 = 10.0;
