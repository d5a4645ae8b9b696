//! Washing stations and their vehicle-selection policies
//!
//! A station is shared state (id, wash type, remaining cleaning capacity)
//! plus a selection policy that decides which vehicle it serves each round.

use std::collections::HashSet;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{
    StationId, VehicleId, INITIAL_CLEANING_LEVEL, RANDOMIZED_DECAY, SEQUENTIAL_DECAY,
};
use super::vehicle::SimVehicle;

/// 64-bit fractional golden-ratio constant for deriving per-station seeds
/// from a single run seed without stream collisions
const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// How a station picks the next vehicle to wash
///
/// Selection is a stateful generator: each call yields at most one candidate
/// and advances the station's roster. Cleanliness is never consulted here;
/// a policy stops only when its own roster is exhausted.
#[derive(Debug)]
pub enum SelectionPolicy {
    /// Serves vehicles in the supplied order, one per round; permanently idle
    /// once the cursor has passed every vehicle
    Sequential { cursor: usize },
    /// Uniform random draws, resampled until an unserved vehicle comes up;
    /// permanently idle once every vehicle has been served once
    Randomized {
        served: HashSet<VehicleId>,
        rng: StdRng,
    },
}

impl SelectionPolicy {
    pub fn sequential() -> Self {
        SelectionPolicy::Sequential { cursor: 0 }
    }

    /// Build a randomized policy. With a run seed, the station's RNG stream
    /// is derived from the seed and the station's position in the input so
    /// whole runs are reproducible; without one, it seeds from OS entropy.
    pub fn randomized(run_seed: Option<u64>, station_index: u64) -> Self {
        let rng = match run_seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ station_index.wrapping_mul(SEED_MIX)),
            None => StdRng::from_os_rng(),
        };
        SelectionPolicy::Randomized {
            served: HashSet::new(),
            rng,
        }
    }

    /// Capacity lost per wash under this policy
    pub fn decay(&self) -> f32 {
        match self {
            SelectionPolicy::Sequential { .. } => SEQUENTIAL_DECAY,
            SelectionPolicy::Randomized { .. } => RANDOMIZED_DECAY,
        }
    }
}

/// A washing station in the simulation
#[derive(Debug)]
pub struct WashStation {
    pub id: StationId,
    /// Key used to look up a vehicle's effectiveness for this station
    pub wash_type: String,
    /// Remaining wash capacity for the run; decays per wash, floors at 0.
    /// A zero-capacity station keeps selecting (and removes zero dirt) until
    /// its roster runs out.
    pub cleaning_level: f32,
    pub policy: SelectionPolicy,
}

impl WashStation {
    pub fn new(id: StationId, wash_type: String, policy: SelectionPolicy) -> Self {
        Self {
            id,
            wash_type,
            cleaning_level: INITIAL_CLEANING_LEVEL,
            policy,
        }
    }

    /// Choose the vehicle this station washes in the current round.
    /// Returns an index into `vehicles`, or `None` when the station's roster
    /// is exhausted and it has nothing to do this round.
    pub fn select_vehicle(&mut self, vehicles: &[SimVehicle]) -> Option<usize> {
        match &mut self.policy {
            SelectionPolicy::Sequential { cursor } => {
                if *cursor >= vehicles.len() {
                    return None;
                }
                let index = *cursor;
                *cursor += 1;
                Some(index)
            }
            SelectionPolicy::Randomized { served, rng } => {
                if served.len() >= vehicles.len() {
                    return None;
                }
                // Rejection sampling: redraw until an unserved vehicle comes up
                loop {
                    let index = rng.random_range(0..vehicles.len());
                    if served.insert(vehicles[index].id) {
                        return Some(index);
                    }
                }
            }
        }
    }

    /// The vehicle's effectiveness factor for this station's wash type.
    /// A vehicle without an entry for the wash type is a data-integrity error.
    pub fn wash_effectiveness(&self, vehicle: &SimVehicle) -> Result<f32> {
        vehicle
            .effectiveness
            .get(&self.wash_type)
            .copied()
            .with_context(|| {
                format!(
                    "Vehicle {} has no effectiveness entry for wash type '{}' (station {})",
                    vehicle.id.0, self.wash_type, self.id.0
                )
            })
    }

    /// Decrement capacity by this station's per-wash decay, flooring at 0
    pub fn apply_decay(&mut self) {
        self.cleaning_level = (self.cleaning_level - self.policy.decay()).max(0.0);
    }
}
