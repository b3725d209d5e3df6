//! erpview-pdf - PDF export via Typst
//!
//! This crate turns the report content into a downloadable PDF byte
//! sequence.
//!
//! # Architecture
//!
//! The export pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts the report constants to Typst markup
//!    carrying the full layout (page header/footer, shaded chapter titles,
//!    the bordered shortfall table, wrapped bodies)
//! 2. **Compiler** - Compiles that markup to PDF bytes
//!
//! The output is deterministic: the markup is a pure function of the
//! content and carries no date metadata, so the same constants always
//! produce the same bytes.
//!
//! # Example
//!
//! ```ignore
//! use erpview_report::REPORT;
//! use erpview_pdf::export_report;
//!
//! let pdf_bytes = export_report(&REPORT)?;
//! std::fs::write("report.pdf", &pdf_bytes)?;
//! ```

mod compiler;
mod error;
mod transpiler;

pub use compiler::Compiler;
pub use error::{ExportError, Result};
pub use transpiler::Transpiler;

use erpview_report::ReportMeta;

/// Media type of the exported document
pub const MEDIA_TYPE: &str = "application/pdf";

/// Export the full report as PDF bytes.
///
/// No filesystem or network access happens here; the document is built
/// entirely in memory.
pub fn export_report(meta: &ReportMeta) -> Result<Vec<u8>> {
    let markup = Transpiler::transpile(meta)?;
    Compiler::compile(&markup)
}
