//! erpview-report - Report content model
//!
//! This crate holds the content of the RIDERS TREND ERP evaluation report:
//! the report metadata, the export sections, the shortfall table, the wages
//! formula, and the closed navigation menu. It is the single source of truth
//! that both the interactive viewer and the PDF exporter read, so the two
//! surfaces cannot drift apart.
//!
//! All content is compile-time constant. Nothing here is computed, fetched,
//! or persisted; the wages formula in particular is display text, never
//! evaluated.

pub mod content;
pub mod menu;
pub mod meta;
pub mod shortfall;

pub use content::{export_sections, Section, SectionContent, WAGES_FORMULA};
pub use menu::MenuEntry;
pub use meta::{ReportMeta, REPORT};
pub use shortfall::{export_rows, Priority, ShortfallRow, SHORTFALLS, SHORTFALL_HEADERS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
