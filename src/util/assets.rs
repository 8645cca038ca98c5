use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;
use tracing::error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Returns the contents of `assets/tailwind.css`.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| load_text("tailwind.css")).as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| {
            let encoded = STANDARD.encode(load_asset("favicon.svg"));
            format!("data:image/svg+xml;base64,{encoded}")
        })
        .as_str()
}

// A missing asset degrades to unstyled output instead of aborting the app.
fn load_text(path: &str) -> String {
    String::from_utf8_lossy(&load_asset(path)).into_owned()
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    match EmbeddedAssets::get(path) {
        Some(file) => file.data,
        None => {
            error!(path, "embedded asset missing");
            Cow::Borrowed(&[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_are_embedded() {
        assert!(main_css().contains(".chart-card"));
        assert!(!tailwind_css().is_empty());
    }

    #[test]
    fn favicon_is_a_base64_svg_uri() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
