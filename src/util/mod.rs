use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod config;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Process-unique id for transient UI items such as toasts.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Thousands-separated integer, e.g. `222,000`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount rounded to whole dollars with separators.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-${}", format_thousands((-rounded) as u64))
    } else {
        format!("${}", format_thousands(rounded as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator_groups_from_the_right() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(15_000_000), "15,000,000");
    }

    #[test]
    fn usd_rounds_to_whole_dollars() {
        assert_eq!(format_usd(15_000_000.0), "$15,000,000");
        assert_eq!(format_usd(249.6), "$250");
        assert_eq!(format_usd(-1_234.4), "-$1,234");
    }

    #[test]
    fn ids_are_unique_per_call() {
        assert_ne!(generate_id("toast"), generate_id("toast"));
    }
}
