//! Revenue of a single cargo mix.

use serde::{Deserialize, Serialize};

use super::{entities::Commodity, error::FleetError};

/// How far below zero the derived barley ratio may drift before it is rejected.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Whole tons of `total * ratio`, truncated and never above `total`.
pub fn truncate_tons(total: u32, ratio: f64) -> u32 {
    ((total as f64 * ratio).floor() as u32).min(total)
}

/// User-supplied parameters for one mix calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixInputs {
    pub capacity: u32,
    pub corn_ratio: f64,
    pub milo_ratio: f64,
    pub corn_price: f64,
    pub milo_price: f64,
    pub barley_price: f64,
}

impl Default for MixInputs {
    fn default() -> Self {
        Self {
            capacity: 60_000,
            corn_ratio: 0.6,
            milo_ratio: 0.3,
            corn_price: 250.0,
            milo_price: 240.0,
            barley_price: 280.0,
        }
    }
}

impl MixInputs {
    pub fn barley_ratio(&self) -> f64 {
        1.0 - self.corn_ratio - self.milo_ratio
    }

    pub fn compute(&self) -> Result<MixResult, FleetError> {
        compute_mix(
            self.capacity,
            self.corn_ratio,
            self.milo_ratio,
            self.corn_price,
            self.milo_price,
            self.barley_price,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixResult {
    pub corn_tons: u32,
    pub milo_tons: u32,
    pub barley_tons: u32,
    pub barley_ratio: f64,
    pub corn_revenue: f64,
    pub milo_revenue: f64,
    pub barley_revenue: f64,
    pub total_revenue: f64,
    pub average_unit_price: f64,
}

impl MixResult {
    pub fn tons(&self, commodity: Commodity) -> u32 {
        match commodity {
            Commodity::Corn => self.corn_tons,
            Commodity::Milo => self.milo_tons,
            Commodity::Barley => self.barley_tons,
        }
    }

    pub fn revenue(&self, commodity: Commodity) -> f64 {
        match commodity {
            Commodity::Corn => self.corn_revenue,
            Commodity::Milo => self.milo_revenue,
            Commodity::Barley => self.barley_revenue,
        }
    }
}

/// Splits `capacity` by the given ratios and prices each share.
///
/// Barley takes whatever corn and milo leave over. Tonnages are truncated
/// independently, so their sum can fall a few tons short of `capacity`.
pub fn compute_mix(
    capacity: u32,
    corn_ratio: f64,
    milo_ratio: f64,
    corn_price: f64,
    milo_price: f64,
    barley_price: f64,
) -> Result<MixResult, FleetError> {
    for ratio in [corn_ratio, milo_ratio] {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(FleetError::InvalidRatio { ratio });
        }
    }
    let barley_ratio = 1.0 - corn_ratio - milo_ratio;
    if barley_ratio < -RATIO_EPSILON {
        return Err(FleetError::InvalidRatio {
            ratio: barley_ratio,
        });
    }
    let barley_ratio = barley_ratio.max(0.0);

    for (commodity, price) in [
        (Commodity::Corn, corn_price),
        (Commodity::Milo, milo_price),
        (Commodity::Barley, barley_price),
    ] {
        if !price.is_finite() || price < 0.0 {
            return Err(FleetError::InvalidPrice { commodity, price });
        }
    }

    let corn_tons = truncate_tons(capacity, corn_ratio);
    let milo_tons = truncate_tons(capacity, milo_ratio);
    let barley_tons = truncate_tons(capacity, barley_ratio);

    let corn_revenue = corn_tons as f64 * corn_price;
    let milo_revenue = milo_tons as f64 * milo_price;
    let barley_revenue = barley_tons as f64 * barley_price;
    let total_revenue = corn_revenue + milo_revenue + barley_revenue;

    if capacity == 0 {
        return Err(FleetError::DivisionByZero);
    }
    let average_unit_price = total_revenue / capacity as f64;

    Ok(MixResult {
        corn_tons,
        milo_tons,
        barley_tons,
        barley_ratio,
        corn_revenue,
        milo_revenue,
        barley_revenue,
        total_revenue,
        average_unit_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_share_never_exceeds_total() {
        assert_eq!(truncate_tons(3_998_000, 1.000_000_9), 3_998_000);
        assert_eq!(truncate_tons(59_999, 0.5), 29_999);
    }

    #[test]
    fn barley_ratio_is_the_remainder() {
        let inputs = MixInputs::default();
        assert!((inputs.barley_ratio() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn reference_mix_matches_hand_calculation() {
        let result = compute_mix(60_000, 0.6, 0.3, 250.0, 240.0, 280.0).unwrap();
        assert_eq!(result.corn_tons, 36_000);
        assert_eq!(result.milo_tons, 18_000);
        assert_eq!(result.barley_tons, 6_000);
        assert_eq!(result.corn_revenue, 9_000_000.0);
        assert_eq!(result.milo_revenue, 4_320_000.0);
        assert_eq!(result.barley_revenue, 1_680_000.0);
        assert_eq!(result.total_revenue, 15_000_000.0);
        assert_eq!(result.average_unit_price, 250.0);
    }

    #[test]
    fn default_inputs_reproduce_reference_mix() {
        let result = MixInputs::default().compute().unwrap();
        assert_eq!(result.total_revenue, 15_000_000.0);
        assert!((result.barley_ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn all_corn_leaves_nothing_for_milo_and_barley() {
        let result = compute_mix(58_000, 1.0, 0.0, 250.0, 240.0, 280.0).unwrap();
        assert_eq!(result.corn_tons, 58_000);
        assert_eq!(result.milo_tons, 0);
        assert_eq!(result.barley_tons, 0);
        assert_eq!(result.average_unit_price, 250.0);
    }

    #[test]
    fn milo_beyond_remaining_share_is_rejected() {
        let err = compute_mix(60_000, 0.7, 0.4, 250.0, 240.0, 280.0).unwrap_err();
        assert!(matches!(err, FleetError::InvalidRatio { ratio } if ratio < 0.0));
    }

    #[test]
    fn tiny_negative_barley_share_is_clamped() {
        let result = compute_mix(60_000, 0.7, 0.3 + 1e-12, 250.0, 240.0, 280.0).unwrap();
        assert_eq!(result.barley_ratio, 0.0);
        assert_eq!(result.barley_tons, 0);
    }

    #[test]
    fn out_of_range_input_ratios_are_rejected() {
        assert!(matches!(
            compute_mix(60_000, -0.1, 0.3, 1.0, 1.0, 1.0),
            Err(FleetError::InvalidRatio { .. })
        ));
        assert!(matches!(
            compute_mix(60_000, f64::NAN, 0.3, 1.0, 1.0, 1.0),
            Err(FleetError::InvalidRatio { .. })
        ));
    }

    #[test]
    fn zero_prices_are_valid_but_negative_prices_are_not() {
        let free = compute_mix(60_000, 0.6, 0.3, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(free.total_revenue, 0.0);
        assert_eq!(free.average_unit_price, 0.0);

        let err = compute_mix(60_000, 0.6, 0.3, 250.0, -1.0, 280.0).unwrap_err();
        assert_eq!(
            err,
            FleetError::InvalidPrice {
                commodity: Commodity::Milo,
                price: -1.0
            }
        );
    }

    #[test]
    fn zero_capacity_fails_instead_of_dividing() {
        assert_eq!(
            compute_mix(0, 0.6, 0.3, 250.0, 240.0, 280.0),
            Err(FleetError::DivisionByZero)
        );
    }

    #[test]
    fn truncation_can_leave_tons_unassigned() {
        let result = compute_mix(55_555, 0.3, 0.3, 1.0, 1.0, 1.0).unwrap();
        let assigned = result.corn_tons + result.milo_tons + result.barley_tons;
        assert!(assigned <= 55_555);
        assert_eq!(result.corn_tons, 16_666);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let inputs = MixInputs {
            capacity: 61_000,
            corn_ratio: 0.3,
            milo_ratio: 0.5,
            corn_price: 251.37,
            milo_price: 239.9,
            barley_price: 281.05,
        };
        let first = inputs.compute().unwrap();
        let second = inputs.compute().unwrap();
        assert_eq!(first.total_revenue.to_bits(), second.total_revenue.to_bits());
        assert_eq!(
            first.average_unit_price.to_bits(),
            second.average_unit_price.to_bits()
        );
        assert_eq!(first, second);
    }
}
