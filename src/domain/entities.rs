use serde::{Deserialize, Serialize};
use time::{macros::format_description, OffsetDateTime};

/// Operational state of a ship at snapshot time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipStatus {
    Underway,
    Loading,
    /// Anchored offshore, waiting for a berth.
    Waiting,
    PreparingToDock,
}

impl ShipStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShipStatus::Underway => "Underway",
            ShipStatus::Loading => "Loading",
            ShipStatus::Waiting => "Waiting",
            ShipStatus::PreparingToDock => "Preparing to dock",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ShipStatus::Underway => "🌊",
            ShipStatus::Loading => "🏗️",
            ShipStatus::Waiting => "⚓",
            ShipStatus::PreparingToDock => "🛳️",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub ship_id: String,
    pub ship_name: String,
    /// Maximum deadweight in metric tons.
    pub capacity: u32,
    pub status: ShipStatus,
}

impl Ship {
    pub fn new(
        ship_id: impl Into<String>,
        ship_name: impl Into<String>,
        capacity: u32,
        status: ShipStatus,
    ) -> Self {
        Self {
            ship_id: ship_id.into(),
            ship_name: ship_name.into(),
            capacity,
            status,
        }
    }
}

/// The three feed grains carried by the fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    Corn,
    Milo,
    Barley,
}

impl Commodity {
    pub const ALL: [Commodity; 3] = [Commodity::Corn, Commodity::Milo, Commodity::Barley];

    pub fn label(&self) -> &'static str {
        match self {
            Commodity::Corn => "CORN",
            Commodity::Milo => "MILO",
            Commodity::Barley => "BARLEY",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Commodity::Corn => "Corn",
            Commodity::Milo => "Milo",
            Commodity::Barley => "Feed barley",
        }
    }
}

/// Named split of a voyage's cargo across the three commodities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CargoPattern {
    pub name: String,
    pub corn_ratio: f64,
    pub milo_ratio: f64,
    pub barley_ratio: f64,
}

impl CargoPattern {
    pub fn new(name: impl Into<String>, corn_ratio: f64, milo_ratio: f64, barley_ratio: f64) -> Self {
        Self {
            name: name.into(),
            corn_ratio,
            milo_ratio,
            barley_ratio,
        }
    }

    pub fn ratio(&self, commodity: Commodity) -> f64 {
        match commodity {
            Commodity::Corn => self.corn_ratio,
            Commodity::Milo => self.milo_ratio,
            Commodity::Barley => self.barley_ratio,
        }
    }

    pub fn ratio_sum(&self) -> f64 {
        Commodity::ALL.into_iter().map(|c| self.ratio(c)).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Voyage {
    pub voyage_id: String,
    // Non-owning link back to the ship record.
    pub ship_id: String,
    pub ship_name: String,
    pub total_cargo: u32,
    pub cargo_pattern: String,
    pub corn_tons: u32,
    pub milo_tons: u32,
    pub barley_tons: u32,
    pub loading_port: String,
    pub eta: OffsetDateTime,
    pub discharge_ports: Vec<String>,
}

impl Voyage {
    pub fn tons(&self, commodity: Commodity) -> u32 {
        match commodity {
            Commodity::Corn => self.corn_tons,
            Commodity::Milo => self.milo_tons,
            Commodity::Barley => self.barley_tons,
        }
    }

    /// ETA rendered as `MM/DD HH:MM`.
    pub fn eta_label(&self) -> String {
        self.eta
            .format(format_description!("[month]/[day] [hour]:[minute]"))
            .unwrap_or_else(|_| "n/a".to_string())
    }

    pub fn discharge_route(&self) -> String {
        self.discharge_ports.join(" → ")
    }
}

/// One generated dataset: ships and their voyages, index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetSnapshot {
    pub ships: Vec<Ship>,
    pub voyages: Vec<Voyage>,
    pub generated_at: OffsetDateTime,
}

impl FleetSnapshot {
    pub fn ship_for(&self, voyage: &Voyage) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.ship_id == voyage.ship_id)
    }

    pub fn total_cargo(&self) -> u64 {
        self.voyages.iter().map(|v| v.total_cargo as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn voyage() -> Voyage {
        Voyage {
            voyage_id: "V2024001".to_string(),
            ship_id: "BULK_001".to_string(),
            ship_name: "Kaio Maru".to_string(),
            total_cargo: 57_000,
            cargo_pattern: "CORN+MILO".to_string(),
            corn_tons: 34_200,
            milo_tons: 22_800,
            barley_tons: 0,
            loading_port: "Seattle".to_string(),
            eta: datetime!(2024-03-07 08:05 UTC),
            discharge_ports: vec!["CHIBA".to_string(), "NAGOYA".to_string()],
        }
    }

    #[test]
    fn eta_label_uses_month_day_and_clock() {
        assert_eq!(voyage().eta_label(), "03/07 08:05");
    }

    #[test]
    fn discharge_route_keeps_port_order() {
        assert_eq!(voyage().discharge_route(), "CHIBA → NAGOYA");
    }

    #[test]
    fn tons_selects_commodity_column() {
        let voyage = voyage();
        assert_eq!(voyage.tons(Commodity::Corn), 34_200);
        assert_eq!(voyage.tons(Commodity::Milo), 22_800);
        assert_eq!(voyage.tons(Commodity::Barley), 0);
    }
}
