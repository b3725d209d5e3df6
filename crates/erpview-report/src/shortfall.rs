//! Shortfall table
//!
//! The canonical shortfall dataset shown on the Shortfall & Risks screen.
//! The exported document carries a fixed five-row subset of it, selected by
//! index, so screen and export can never disagree on a row they share.
//! Duplicate module names (Costing appears twice) are part of the dataset.

use std::fmt;

use serde::Serialize;

/// Priority of a shortfall
///
/// The current dataset only uses `High`; the other levels exist so that
/// future rows render without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the shortfall table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortfallRow {
    /// ERP module the shortfall belongs to (not unique across rows)
    pub module: &'static str,
    /// Observed shortfall
    pub shortfall: &'static str,
    /// Business impact; only shown on the interactive screen
    pub impact: Option<&'static str>,
    pub priority: Priority,
}

/// Column headers of the on-screen table
pub const SHORTFALL_HEADERS: [&str; 4] = ["Module", "Shortfall", "Impact", "Priority"];

/// The canonical dataset, as shown on the Shortfall & Risks screen
pub static SHORTFALLS: [ShortfallRow; 7] = [
    ShortfallRow {
        module: "Costing",
        shortfall: "Manual overhead allocation",
        impact: Some("Incorrect costing"),
        priority: Priority::High,
    },
    ShortfallRow {
        module: "Costing",
        shortfall: "Delayed cost updates",
        impact: Some("Outdated financial info"),
        priority: Priority::High,
    },
    ShortfallRow {
        module: "MRP",
        shortfall: "Manual adjustments required",
        impact: Some("Risk of stock-outs"),
        priority: Priority::High,
    },
    ShortfallRow {
        module: "BOM",
        shortfall: "No version control",
        impact: Some("Production errors"),
        priority: Priority::High,
    },
    ShortfallRow {
        module: "Inventory",
        shortfall: "Stock valuation delayed",
        impact: Some("Financial misreporting"),
        priority: Priority::High,
    },
    ShortfallRow {
        module: "HR & Payroll",
        shortfall: "Tax & statutory compliance gaps",
        impact: Some("Compliance risk"),
        priority: Priority::High,
    },
    ShortfallRow {
        module: "Management",
        shortfall: "Weak forecasting",
        impact: Some("Reactive planning"),
        priority: Priority::High,
    },
];

// One row per distinct module; the second Costing row and the Management row
// stay screen-only.
const EXPORT_PICKS: [usize; 5] = [0, 2, 3, 4, 5];

/// The five rows carried by the exported document, in table order
pub fn export_rows() -> [&'static ShortfallRow; 5] {
    EXPORT_PICKS.map(|i| &SHORTFALLS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_table_has_seven_rows() {
        assert_eq!(SHORTFALLS.len(), 7);
    }

    #[test]
    fn test_export_subset_has_five_rows() {
        assert_eq!(export_rows().len(), 5);
    }

    #[test]
    fn test_export_rows_come_from_canonical_table() {
        for row in export_rows() {
            assert!(SHORTFALLS.iter().any(|r| r == row));
        }
    }

    #[test]
    fn test_export_modules_are_distinct() {
        let rows = export_rows();
        for (i, a) in rows.iter().enumerate() {
            for b in &rows[i + 1..] {
                assert_ne!(a.module, b.module);
            }
        }
    }

    #[test]
    fn test_every_priority_is_high() {
        for row in &SHORTFALLS {
            assert_eq!(row.priority, Priority::High);
        }
    }

    #[test]
    fn test_every_row_has_an_impact() {
        assert!(SHORTFALLS.iter().all(|r| r.impact.is_some()));
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::Medium.to_string(), "Medium");
    }
}
