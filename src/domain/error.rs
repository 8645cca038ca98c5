use thiserror::Error;

use super::entities::Commodity;

/// Failures raised by fleet generation and cargo economics.
///
/// Both components fail fast: an error means no records were produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FleetError {
    #[error("invalid fleet configuration: {0}")]
    Configuration(String),
    #[error("slack of {slack}t does not fit ship {ship_id} with capacity {capacity}t")]
    InvalidCapacity {
        ship_id: String,
        capacity: u32,
        slack: u32,
    },
    #[error("cargo ratio {ratio} is outside the range 0.0..=1.0")]
    InvalidRatio { ratio: f64 },
    #[error("{} price {price} must be a non-negative number", commodity.label())]
    InvalidPrice { commodity: Commodity, price: f64 },
    #[error("capacity is zero; average unit price is undefined")]
    DivisionByZero,
}

impl FleetError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
