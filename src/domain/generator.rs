//! Synthetic fleet and voyage data.

use rand::{seq::SliceRandom, Rng};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use super::{
    economics::truncate_tons,
    entities::{FleetSnapshot, Ship, Voyage},
    error::FleetError,
    fleet_config::FleetConfig,
};

/// Builds voyage snapshots from a validated [`FleetConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct FleetGenerator {
    config: FleetConfig,
}

impl Default for FleetGenerator {
    fn default() -> Self {
        // The built-in catalog is covered by `default_config_is_valid`.
        Self {
            config: FleetConfig::default(),
        }
    }
}

impl FleetGenerator {
    pub fn new(config: FleetConfig) -> Result<Self, FleetError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Generates one voyage per ship, in catalog order.
    ///
    /// Randomness comes only from `rng`; the same seed and `now` yield the
    /// same snapshot.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: OffsetDateTime,
    ) -> Result<FleetSnapshot, FleetError> {
        let year = now.year();
        let voyages = self
            .config
            .ships
            .iter()
            .enumerate()
            .map(|(index, ship)| self.voyage_for(ship, index + 1, year, rng, now))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FleetSnapshot {
            ships: self.config.ships.clone(),
            voyages,
            generated_at: now,
        })
    }

    fn voyage_for<R: Rng + ?Sized>(
        &self,
        ship: &Ship,
        sequence: usize,
        year: i32,
        rng: &mut R,
        now: OffsetDateTime,
    ) -> Result<Voyage, FleetError> {
        let config = &self.config;

        let pattern = config
            .cargo_patterns
            .choose(rng)
            .ok_or_else(|| FleetError::configuration("cargo pattern set is empty"))?;

        let slack = rng.gen_range(config.slack_tons.min..=config.slack_tons.max);
        if slack >= ship.capacity {
            return Err(FleetError::InvalidCapacity {
                ship_id: ship.ship_id.clone(),
                capacity: ship.capacity,
                slack,
            });
        }
        let total_cargo = ship.capacity - slack;

        let loading_port = config
            .loading_ports
            .choose(rng)
            .ok_or_else(|| FleetError::configuration("loading port set is empty"))?;

        let eta_days = rng.gen_range(config.eta_days.min..=config.eta_days.max);
        let eta = now + Duration::days(i64::from(eta_days));

        let discharge_ports = config
            .discharge_combinations
            .choose(rng)
            .ok_or_else(|| FleetError::configuration("discharge port combination set is empty"))?;

        let voyage = Voyage {
            voyage_id: voyage_id(year, sequence),
            ship_id: ship.ship_id.clone(),
            ship_name: ship.ship_name.clone(),
            total_cargo,
            cargo_pattern: pattern.name.clone(),
            corn_tons: truncate_tons(total_cargo, pattern.corn_ratio),
            milo_tons: truncate_tons(total_cargo, pattern.milo_ratio),
            barley_tons: truncate_tons(total_cargo, pattern.barley_ratio),
            loading_port: loading_port.clone(),
            eta,
            discharge_ports: discharge_ports.clone(),
        };
        debug!(
            voyage_id = %voyage.voyage_id,
            ship = %ship.ship_id,
            pattern = %voyage.cargo_pattern,
            total_cargo,
            slack,
            "generated voyage"
        );
        Ok(voyage)
    }
}

/// `V` + year + sequence padded to at least three digits.
pub fn voyage_id(year: i32, sequence: usize) -> String {
    format!("V{year}{sequence:03}")
}
