//! Catalog and tuning knobs for the synthetic fleet generator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{
    entities::{CargoPattern, Commodity, Ship, ShipStatus},
    error::FleetError,
};

/// Allowed drift of a pattern's ratio sum away from 1.0.
pub const PATTERN_RATIO_TOLERANCE: f64 = 1e-6;

/// Closed integer range `min..=max` that survives a JSON round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub min: u32,
    pub max: u32,
}

impl InclusiveRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub ships: Vec<Ship>,
    pub cargo_patterns: Vec<CargoPattern>,
    /// Tons left unloaded on each voyage.
    pub slack_tons: InclusiveRange,
    /// Days from generation time until arrival.
    pub eta_days: InclusiveRange,
    pub loading_ports: Vec<String>,
    pub discharge_combinations: Vec<Vec<String>>,
    /// Fixed seed for reproducible demo data; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            ships: vec![
                Ship::new("BULK_001", "Kaio Maru", 60_000, ShipStatus::Underway),
                Ship::new("BULK_002", "Taiyo Maru", 58_000, ShipStatus::Loading),
                Ship::new("BULK_003", "Taihei Maru", 62_000, ShipStatus::Waiting),
                Ship::new("BULK_004", "Tokai Maru", 59_000, ShipStatus::PreparingToDock),
            ],
            cargo_patterns: vec![
                CargoPattern::new("CORN+MILO", 0.6, 0.4, 0.0),
                CargoPattern::new("CORN+BARLEY", 0.7, 0.0, 0.3),
                CargoPattern::new("MILO+BARLEY", 0.0, 0.55, 0.45),
            ],
            slack_tons: InclusiveRange::new(2_000, 5_000),
            eta_days: InclusiveRange::new(1, 10),
            loading_ports: ports(&["Seattle", "Vancouver", "New Orleans"]),
            discharge_combinations: vec![
                ports(&["CHIBA"]),
                ports(&["YOKOHAMA"]),
                ports(&["CHIBA", "NAGOYA"]),
                ports(&["YOKOHAMA", "CHIBA"]),
            ],
            seed: None,
        }
    }
}

fn ports(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl FleetConfig {
    /// Checks every structural rule the generator relies on.
    pub fn validate(&self) -> Result<(), FleetError> {
        if self.ships.is_empty() {
            return Err(FleetError::configuration("ship catalog is empty"));
        }
        let mut seen = HashSet::new();
        for ship in &self.ships {
            if !seen.insert(ship.ship_id.as_str()) {
                return Err(FleetError::configuration(format!(
                    "duplicate ship id {}",
                    ship.ship_id
                )));
            }
            if ship.capacity == 0 {
                return Err(FleetError::configuration(format!(
                    "ship {} has zero capacity",
                    ship.ship_id
                )));
            }
        }

        if self.cargo_patterns.is_empty() {
            return Err(FleetError::configuration("cargo pattern set is empty"));
        }
        for pattern in &self.cargo_patterns {
            validate_pattern(pattern)?;
        }

        if !self.slack_tons.is_ordered() {
            return Err(FleetError::configuration(format!(
                "slack range {}..={} is inverted",
                self.slack_tons.min, self.slack_tons.max
            )));
        }
        if !self.eta_days.is_ordered() {
            return Err(FleetError::configuration(format!(
                "ETA day range {}..={} is inverted",
                self.eta_days.min, self.eta_days.max
            )));
        }

        if self.loading_ports.is_empty() {
            return Err(FleetError::configuration("loading port set is empty"));
        }
        if self.discharge_combinations.is_empty() {
            return Err(FleetError::configuration(
                "discharge port combination set is empty",
            ));
        }
        if self.discharge_combinations.iter().any(|combo| combo.is_empty()) {
            return Err(FleetError::configuration(
                "discharge port combinations must name at least one port",
            ));
        }

        Ok(())
    }

    pub fn pattern_names(&self) -> Vec<String> {
        self.cargo_patterns.iter().map(|p| p.name.clone()).collect()
    }
}

fn validate_pattern(pattern: &CargoPattern) -> Result<(), FleetError> {
    if Commodity::ALL
        .into_iter()
        .map(|c| pattern.ratio(c))
        .any(|r| !r.is_finite() || r < 0.0)
    {
        return Err(FleetError::configuration(format!(
            "pattern {} has a negative or non-numeric ratio",
            pattern.name
        )));
    }
    let sum = pattern.ratio_sum();
    if (sum - 1.0).abs() > PATTERN_RATIO_TOLERANCE {
        return Err(FleetError::configuration(format!(
            "pattern {} ratios sum to {sum}, expected 1.0",
            pattern.name
        )));
    }
    Ok(())
}
