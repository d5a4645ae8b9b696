//! JSON input/output boundary for the simulation
//!
//! The wire types here mirror the file format and are kept separate from the
//! domain types in `simulation`. Validation is strict: unknown fields,
//! unknown station rules, and malformed values are rejected at load time with
//! a descriptive error, before any simulation round runs.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::simulation::{
    SelectionPolicy, SimVehicle, StationId, VehicleId, VehicleResult, WashStation,
};

/// Station selection rule as spelled on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationRule {
    Sequential,
    Randomized,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VehicleInput {
    id: u32,
    dirtiness: f32,
    effectiveness_levels: HashMap<String, f32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StationInput {
    id: u32,
    wash_type: String,
    rule: StationRule,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationInput {
    vehicles: Vec<VehicleInput>,
    washing_systems: Vec<StationInput>,
}

#[derive(Debug, Serialize)]
struct VehicleOutput {
    id: u32,
    final_dirtiness: i64,
}

#[derive(Debug, Serialize)]
struct SimulationOutput {
    vehicles: Vec<VehicleOutput>,
}

/// Parse and validate input JSON, building the domain entities.
///
/// `run_seed` seeds each randomized station's RNG stream so whole runs are
/// reproducible; `None` seeds from OS entropy.
pub fn parse_input(data: &str, run_seed: Option<u64>) -> Result<(Vec<SimVehicle>, Vec<WashStation>)> {
    let input: SimulationInput =
        serde_json::from_str(data).context("Input does not match the expected schema")?;

    let mut seen_ids: HashSet<u32> = HashSet::new();
    let mut vehicles = Vec::with_capacity(input.vehicles.len());
    for v in input.vehicles {
        if !seen_ids.insert(v.id) {
            bail!("Duplicate vehicle id {}", v.id);
        }
        if v.dirtiness < 0.0 {
            bail!("Vehicle {} has negative dirtiness {}", v.id, v.dirtiness);
        }
        vehicles.push(SimVehicle::new(
            VehicleId(v.id),
            v.dirtiness,
            v.effectiveness_levels,
        ));
    }

    let stations = input
        .washing_systems
        .into_iter()
        .enumerate()
        .map(|(index, s)| {
            let policy = match s.rule {
                StationRule::Sequential => SelectionPolicy::sequential(),
                StationRule::Randomized => SelectionPolicy::randomized(run_seed, index as u64),
            };
            WashStation::new(StationId(s.id), s.wash_type, policy)
        })
        .collect();

    Ok((vehicles, stations))
}

/// Load the input file from disk
pub fn load_input(
    path: &Path,
    run_seed: Option<u64>,
) -> Result<(Vec<SimVehicle>, Vec<WashStation>)> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    parse_input(&data, run_seed)
        .with_context(|| format!("Invalid input file {}", path.display()))
}

/// Serialize results to the output JSON shape
pub fn results_to_json(results: &[VehicleResult]) -> Result<String> {
    let output = SimulationOutput {
        vehicles: results
            .iter()
            .map(|r| VehicleOutput {
                id: r.id.0,
                final_dirtiness: r.final_dirtiness,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize results")
}

/// Write the results file to disk
pub fn save_results(path: &Path, results: &[VehicleResult]) -> Result<()> {
    let json = results_to_json(results)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    Ok(())
}
