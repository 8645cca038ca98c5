pub const APP_NAME: &str = "Bulk Fleet Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_label() -> String {
    format!("v{APP_VERSION} PoC")
}
