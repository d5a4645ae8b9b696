//! Simulation engine that drives rounds until every vehicle is clean
//!
//! This is the entry point for running the car wash simulation once the
//! vehicles and stations have been loaded.

use anyhow::{bail, Result};
use log::{debug, info, warn};

use super::station::WashStation;
use super::types::VehicleId;
use super::vehicle::SimVehicle;

/// Final per-vehicle outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleResult {
    pub id: VehicleId,
    /// Residual dirt, truncated toward zero
    pub final_dirtiness: i64,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of full rounds executed before every vehicle was clean
    pub rounds: u64,
    /// One entry per vehicle, in input order
    pub results: Vec<VehicleResult>,
}

/// The simulation engine
///
/// Owns the vehicle and station lists for the duration of the run. Station
/// order within a round is significant: an earlier station can zero out a
/// vehicle before a later station in the same round evaluates it.
pub struct SimEngine {
    pub vehicles: Vec<SimVehicle>,
    pub stations: Vec<WashStation>,

    /// Optional round cap. When set, exceeding it surfaces a
    /// did-not-converge error instead of looping forever on dirt that can
    /// never reach exactly zero.
    max_rounds: Option<u64>,
}

impl SimEngine {
    fn new_internal(
        vehicles: Vec<SimVehicle>,
        stations: Vec<WashStation>,
        max_rounds: Option<u64>,
    ) -> Self {
        Self {
            vehicles,
            stations,
            max_rounds,
        }
    }

    pub fn new(vehicles: Vec<SimVehicle>, stations: Vec<WashStation>) -> Self {
        Self::new_internal(vehicles, stations, None)
    }

    /// Create an engine with a round cap as a safety valve against
    /// non-convergent inputs
    pub fn new_with_round_cap(
        vehicles: Vec<SimVehicle>,
        stations: Vec<WashStation>,
        max_rounds: u64,
    ) -> Self {
        Self::new_internal(vehicles, stations, Some(max_rounds))
    }

    /// Whether every vehicle has reached exactly zero dirt
    pub fn all_clean(&self) -> bool {
        self.vehicles.iter().all(|v| v.is_clean())
    }

    /// Run one round: every station, in the supplied order, attempts one wash.
    /// Returns whether every vehicle is clean afterwards.
    pub fn run_round(&mut self) -> Result<bool> {
        for station in &mut self.stations {
            let Some(vehicle_index) = station.select_vehicle(&self.vehicles) else {
                // Roster exhausted; the station sits idle this round
                continue;
            };

            let vehicle = &mut self.vehicles[vehicle_index];
            let effectiveness = station.wash_effectiveness(vehicle)?;
            let removed = station.cleaning_level * effectiveness;

            vehicle.dirtiness = (vehicle.dirtiness - removed).max(0.0);
            station.apply_decay();

            debug!(
                "Station {} washed vehicle {}: removed {:.2} dirt (now {:.2}), capacity {:.2}",
                station.id.0, vehicle.id.0, removed, vehicle.dirtiness, station.cleaning_level
            );
        }

        Ok(self.all_clean())
    }

    /// Run rounds until every vehicle is fully clean
    ///
    /// Without a round cap this loops forever when some vehicle can never
    /// reach exactly zero dirt, e.g. when every station has exhausted its
    /// roster while dirt remains.
    pub fn run(&mut self) -> Result<RunReport> {
        if self.stations.is_empty() && !self.all_clean() {
            warn!("No stations configured while dirty vehicles remain; the run cannot converge");
        }

        let mut rounds: u64 = 0;

        // An empty vehicle list is vacuously clean: zero rounds needed
        while !self.all_clean() {
            if let Some(cap) = self.max_rounds {
                if rounds >= cap {
                    let dirty = self.vehicles.iter().filter(|v| !v.is_clean()).count();
                    bail!(
                        "Simulation did not converge within {} rounds; {} vehicles still dirty",
                        cap,
                        dirty
                    );
                }
            }

            self.run_round()?;
            rounds += 1;
        }

        info!("All vehicles clean after {} rounds", rounds);

        Ok(RunReport {
            rounds,
            results: self.results(),
        })
    }

    /// Final (id, residual dirt) pairs in input order, truncated toward zero
    pub fn results(&self) -> Vec<VehicleResult> {
        self.vehicles
            .iter()
            .map(|v| VehicleResult {
                id: v.id,
                final_dirtiness: v.dirtiness as i64,
            })
            .collect()
    }
}
