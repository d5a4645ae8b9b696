//! Vehicle record for the car wash simulation
//!
//! Passive data holder; all mutation happens in the engine during a wash.

use std::collections::HashMap;

use super::types::VehicleId;

/// A vehicle waiting to be washed
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pub id: VehicleId,
    /// Accumulated dirt; the engine clamps this to 0 on every decrement
    pub dirtiness: f32,
    /// Per-wash-type effectiveness factors, set once at load time
    pub effectiveness: HashMap<String, f32>,
}

impl SimVehicle {
    pub fn new(id: VehicleId, dirtiness: f32, effectiveness: HashMap<String, f32>) -> Self {
        Self {
            id,
            dirtiness,
            effectiveness,
        }
    }

    /// Whether this vehicle has reached exactly zero dirt
    pub fn is_clean(&self) -> bool {
        self.dirtiness == 0.0
    }
}
