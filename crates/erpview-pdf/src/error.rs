//! Error types for PDF export

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting the report
///
/// With constant content neither variant is reachable in normal operation;
/// they exist so a broken constant fails fast with a named location instead
/// of a silently truncated document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A content string contains a character the renderer cannot encode
    #[error("unencodable content in {section}: {detail}")]
    Encoding { section: String, detail: String },

    /// The document engine could not produce pages
    #[error("document compilation failed: {0}")]
    Compile(String),
}
