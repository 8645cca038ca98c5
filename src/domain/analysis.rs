//! Aggregates behind the dashboard and cargo analysis pages.

use super::entities::{Commodity, FleetSnapshot, Ship, ShipStatus, Voyage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetOverview {
    pub underway: usize,
    pub waiting: usize,
    pub loading: usize,
    pub preparing_to_dock: usize,
    pub total_cargo: u64,
}

impl FleetOverview {
    pub fn count(&self, status: ShipStatus) -> usize {
        match status {
            ShipStatus::Underway => self.underway,
            ShipStatus::Waiting => self.waiting,
            ShipStatus::Loading => self.loading,
            ShipStatus::PreparingToDock => self.preparing_to_dock,
        }
    }
}

pub fn fleet_overview(snapshot: &FleetSnapshot) -> FleetOverview {
    let mut overview = FleetOverview {
        total_cargo: snapshot.total_cargo(),
        ..FleetOverview::default()
    };
    for ship in &snapshot.ships {
        match ship.status {
            ShipStatus::Underway => overview.underway += 1,
            ShipStatus::Waiting => overview.waiting += 1,
            ShipStatus::Loading => overview.loading += 1,
            ShipStatus::PreparingToDock => overview.preparing_to_dock += 1,
        }
    }
    overview
}

/// Ship count per status, most frequent first.
pub fn status_distribution(ships: &[Ship]) -> Vec<(ShipStatus, usize)> {
    count_by(ships.iter().map(|ship| ship.status))
}

/// Voyage count per cargo pattern, most frequent first.
pub fn pattern_frequency(voyages: &[Voyage]) -> Vec<(String, usize)> {
    count_by(voyages.iter().map(|voyage| voyage.cargo_pattern.clone()))
}

// Descending by count; ties keep first-seen order because the sort is stable.
fn count_by<K: PartialEq>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommodityTotals {
    pub corn: u64,
    pub milo: u64,
    pub barley: u64,
}

impl CommodityTotals {
    pub fn get(&self, commodity: Commodity) -> u64 {
        match commodity {
            Commodity::Corn => self.corn,
            Commodity::Milo => self.milo,
            Commodity::Barley => self.barley,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Commodity, u64)> + '_ {
        Commodity::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> u64 {
        self.corn + self.milo + self.barley
    }
}

pub fn commodity_totals(voyages: &[Voyage]) -> CommodityTotals {
    voyages
        .iter()
        .fold(CommodityTotals::default(), |mut totals, voyage| {
            totals.corn += voyage.corn_tons as u64;
            totals.milo += voyage.milo_tons as u64;
            totals.barley += voyage.barley_tons as u64;
            totals
        })
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn ship(id: &str, status: ShipStatus) -> Ship {
        Ship::new(id, id, 60_000, status)
    }

    fn voyage(id: &str, pattern: &str, tons: [u32; 3]) -> Voyage {
        Voyage {
            voyage_id: id.to_string(),
            ship_id: id.to_string(),
            ship_name: id.to_string(),
            total_cargo: tons.iter().sum(),
            cargo_pattern: pattern.to_string(),
            corn_tons: tons[0],
            milo_tons: tons[1],
            barley_tons: tons[2],
            loading_port: "Seattle".to_string(),
            eta: datetime!(2024-01-02 00:00 UTC),
            discharge_ports: vec!["CHIBA".to_string()],
        }
    }

    fn snapshot() -> FleetSnapshot {
        FleetSnapshot {
            ships: vec![
                ship("A", ShipStatus::Underway),
                ship("B", ShipStatus::Loading),
                ship("C", ShipStatus::Underway),
                ship("D", ShipStatus::Waiting),
            ],
            voyages: vec![
                voyage("A", "CORN+MILO", [33_000, 22_000, 0]),
                voyage("B", "CORN+BARLEY", [38_000, 0, 16_000]),
                voyage("C", "CORN+MILO", [34_000, 23_000, 0]),
                voyage("D", "MILO+BARLEY", [0, 31_000, 25_000]),
            ],
            generated_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn overview_counts_statuses_and_sums_cargo() {
        let overview = fleet_overview(&snapshot());
        assert_eq!(overview.underway, 2);
        assert_eq!(overview.loading, 1);
        assert_eq!(overview.waiting, 1);
        assert_eq!(overview.count(ShipStatus::PreparingToDock), 0);
        assert_eq!(overview.total_cargo, 222_000);
    }

    #[test]
    fn distribution_orders_by_count_then_first_seen() {
        let snapshot = snapshot();
        assert_eq!(
            status_distribution(&snapshot.ships),
            vec![
                (ShipStatus::Underway, 2),
                (ShipStatus::Loading, 1),
                (ShipStatus::Waiting, 1),
            ]
        );
        assert_eq!(
            pattern_frequency(&snapshot.voyages),
            vec![
                ("CORN+MILO".to_string(), 2),
                ("CORN+BARLEY".to_string(), 1),
                ("MILO+BARLEY".to_string(), 1),
            ]
        );
    }

    #[test]
    fn commodity_totals_sum_each_column() {
        let totals = commodity_totals(&snapshot().voyages);
        assert_eq!(totals.corn, 105_000);
        assert_eq!(totals.milo, 76_000);
        assert_eq!(totals.barley, 41_000);
        assert_eq!(totals.total(), 222_000);
        let labels: Vec<_> = totals.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(labels, ["CORN", "MILO", "BARLEY"]);
    }

    #[test]
    fn empty_inputs_produce_empty_aggregates() {
        assert!(status_distribution(&[]).is_empty());
        assert!(pattern_frequency(&[]).is_empty());
        assert_eq!(commodity_totals(&[]), CommodityTotals::default());
    }
}
