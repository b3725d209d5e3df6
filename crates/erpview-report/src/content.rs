//! Export sections
//!
//! The four sections of the exported document, in their contractual order.
//! Section bodies keep the literal line breaks and `- ` bullet markers of
//! the source text; the exporter renders them verbatim.

use serde::Serialize;

use crate::meta::ReportMeta;

/// The wages formula, displayed as literal text and never evaluated
pub const WAGES_FORMULA: &str = "Total Wages = (Basic Time Rate x Hours Worked) \
     + (Piece Rate x Units Produced) + Incentives - Deductions";

/// Body of the Recommendations section
pub const RECOMMENDATIONS: &str = "\
- Short Term: Automate cost updates and enable real-time stock valuation.
- Medium Term: Implement full MRP automation and BOM version control.
- Long Term: Introduce AI-based material & cost forecasting.";

/// What a section renders as
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SectionContent {
    /// Word-wrapped body text (may contain embedded line breaks)
    Text(String),
    /// The bordered five-row shortfall table
    ShortfallTable,
}

/// A titled section of the exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub content: SectionContent,
}

impl Section {
    fn text(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            content: SectionContent::Text(body.into()),
        }
    }
}

/// Build the export sections in their fixed order.
///
/// Consumers may depend on the order: Executive Summary, Critical Shortfall
/// Report, Production & Wages Formula, Recommendations.
pub fn export_sections(meta: &ReportMeta) -> Vec<Section> {
    vec![
        Section::text("1. Executive Summary", executive_summary(meta)),
        Section {
            title: "2. Critical Shortfall Report".to_string(),
            content: SectionContent::ShortfallTable,
        },
        Section::text("3. Production & Wages Formula", WAGES_FORMULA),
        Section::text("4. Recommendations", RECOMMENDATIONS),
    ]
}

fn executive_summary(meta: &ReportMeta) -> String {
    format!(
        "Prepared By: {}\nDate: {}\n\nThis report evaluates the VB.NET-based \
         ERP system implemented at {} (Gloves Manufacturing). The system \
         integrates inventory, finance, sales, purchasing, production, and \
         HR. While operational efficiency has improved, shortfalls exist in \
         automation and real-time reporting.",
        meta.author, meta.date, meta.company
    )
}
