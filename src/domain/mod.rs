//! Fleet data model, synthetic data generation and cargo economics.

pub mod analysis;
pub mod app_state;
pub mod economics;
pub mod entities;
pub mod error;
pub mod fleet_config;
pub mod generator;
pub mod report;

pub use analysis::{commodity_totals, fleet_overview, pattern_frequency, status_distribution};
pub use app_state::{AppState, ConfigSource};
pub use economics::{MixInputs, MixResult};
pub use entities::{Commodity, FleetSnapshot, ShipStatus, Voyage};
pub use error::FleetError;
pub use fleet_config::FleetConfig;
pub use report::{monthly_trend, report_summary, trend_seed, ReportPeriod, MONTHLY_VOLUME_RANGE};
