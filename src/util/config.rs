use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::domain::{FleetConfig, FleetError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FleetDashboard";
const APP_NAME: &str = "FleetDashboard";
const CONFIG_FILENAME: &str = "fleet.json";

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Reads `fleet.json` from the platform config directory.
///
/// `Ok(None)` when no file exists; the caller keeps the built-in catalog.
pub fn load_fleet_config() -> Result<Option<(FleetConfig, PathBuf)>, ConfigError> {
    let path = config_file().ok_or(ConfigError::StorageUnavailable)?;
    if !path.exists() {
        info!(path = %path.display(), "no fleet config file; using defaults");
        return Ok(None);
    }
    let config = load_from_path(&path)?;
    Ok(Some((config, path)))
}

pub fn load_from_path(path: &Path) -> Result<FleetConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    let config = parse_config(&data).inspect_err(|err| {
        warn!(path = %path.display(), %err, "rejected fleet config");
    })?;
    info!(
        path = %path.display(),
        ships = config.ships.len(),
        patterns = config.cargo_patterns.len(),
        "loaded fleet config"
    );
    Ok(config)
}

pub fn parse_config(data: &str) -> Result<FleetConfig, ConfigError> {
    let config: FleetConfig = serde_json::from_str(data)?;
    config.validate()?;
    Ok(config)
}

/// Writes `config` as pretty JSON to the platform config directory.
pub fn save_fleet_config(config: &FleetConfig) -> Result<PathBuf, ConfigError> {
    let path = config_file().ok_or(ConfigError::StorageUnavailable)?;
    save_to_path(config, &path)?;
    Ok(path)
}

pub fn save_to_path(config: &FleetConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "wrote fleet config");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error(transparent)]
    Invalid(#[from] FleetError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipStatus;

    #[test]
    fn parses_custom_catalog() {
        let config = parse_config(
            r#"{
                "ships": [
                    { "ship_id": "PX_01", "ship_name": "Panamax One", "capacity": 75000, "status": "waiting" }
                ],
                "cargo_patterns": [
                    { "name": "CORN", "corn_ratio": 1.0, "milo_ratio": 0.0, "barley_ratio": 0.0 }
                ],
                "loading_ports": ["Portland"]
            }"#,
        )
        .unwrap();
        assert_eq!(config.ships.len(), 1);
        assert_eq!(config.ships[0].status, ShipStatus::Waiting);
        assert_eq!(config.loading_ports, ["Portland"]);
        assert_eq!(config.discharge_combinations.len(), 4);
    }

    #[test]
    fn invalid_ratios_surface_as_configuration_error() {
        let err = parse_config(
            r#"{ "cargo_patterns": [
                { "name": "OVER", "corn_ratio": 0.8, "milo_ratio": 0.8, "barley_ratio": 0.0 }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(FleetError::Configuration(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            parse_config("{ ships: "),
            Err(ConfigError::Serde(_))
        ));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);
        let mut config = FleetConfig::default();
        config.seed = Some(2024);

        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
