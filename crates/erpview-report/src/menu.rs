//! Navigation menu
//!
//! The viewer exposes a fixed, closed set of seven entries. Each entry maps
//! to exactly one static screen; the last one is the PDF export page.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One entry of the report navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuEntry {
    ExecutiveSummary,
    TechnicalEvaluation,
    FunctionalModules,
    ShortfallRisks,
    ProductionWages,
    Recommendations,
    DownloadPdf,
}

impl MenuEntry {
    /// Every entry, in display order
    pub const ALL: [MenuEntry; 7] = [
        MenuEntry::ExecutiveSummary,
        MenuEntry::TechnicalEvaluation,
        MenuEntry::FunctionalModules,
        MenuEntry::ShortfallRisks,
        MenuEntry::ProductionWages,
        MenuEntry::Recommendations,
        MenuEntry::DownloadPdf,
    ];

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::ExecutiveSummary => "Executive Summary",
            MenuEntry::TechnicalEvaluation => "Technical Evaluation",
            MenuEntry::FunctionalModules => "Functional Modules",
            MenuEntry::ShortfallRisks => "Shortfall & Risks",
            MenuEntry::ProductionWages => "Production & Wages",
            MenuEntry::Recommendations => "Strategic Recommendations",
            MenuEntry::DownloadPdf => "Download PDF",
        }
    }

    /// Stable kebab-case name, used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            MenuEntry::ExecutiveSummary => "executive-summary",
            MenuEntry::TechnicalEvaluation => "technical-evaluation",
            MenuEntry::FunctionalModules => "functional-modules",
            MenuEntry::ShortfallRisks => "shortfall-risks",
            MenuEntry::ProductionWages => "production-wages",
            MenuEntry::Recommendations => "recommendations",
            MenuEntry::DownloadPdf => "download-pdf",
        }
    }

    /// 1-based position in the menu
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|e| e == self).unwrap_or(0) + 1
    }

    /// Look an entry up by its 1-based menu position
    pub fn from_position(position: usize) -> Option<MenuEntry> {
        if position == 0 {
            return None;
        }
        Self::ALL.get(position - 1).copied()
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuEntry {
    type Err = String;

    /// Accepts the kebab-case name or the display label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        for entry in MenuEntry::ALL {
            if wanted.eq_ignore_ascii_case(entry.name())
                || wanted.eq_ignore_ascii_case(entry.label())
            {
                return Ok(entry);
            }
        }
        Err(format!("unknown menu entry: {wanted}"))
    }
}
