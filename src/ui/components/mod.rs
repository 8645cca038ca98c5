pub mod cargo_table;
pub mod charts;
pub mod kpi_card;
pub mod toast;
pub mod voyage_table;
