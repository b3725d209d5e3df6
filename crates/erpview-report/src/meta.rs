//! Report metadata
//!
//! The company, author, and date stamped on every surface of the report.
//! A single immutable value is passed explicitly into the screen builders
//! and the exporter instead of being read from globals.

use serde::Serialize;

/// Identity of the evaluated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportMeta {
    /// Company the ERP system was evaluated for
    pub company: &'static str,
    /// Report author
    pub author: &'static str,
    /// Report date, as printed (no date arithmetic happens anywhere)
    pub date: &'static str,
}

/// The one report this tool knows about
pub const REPORT: ReportMeta = ReportMeta {
    company: "RIDERS TREND",
    author: "ZUBAIR BAIG",
    date: "09.02.2026",
};

impl ReportMeta {
    /// Title line shown in the page header of every exported page
    pub fn document_title(&self) -> String {
        format!("ERP Evaluation Report: {}", self.company)
    }

    /// File name offered for the exported document
    pub fn export_file_name(&self) -> &'static str {
        "ERP_Evaluation_Riders_Trend.pdf"
    }
}
