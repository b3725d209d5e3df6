//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. Fonts come from
//! the library's embedded defaults; nothing is read from disk or fetched.

use typst_as_lib::TypstEngine;

use crate::error::{ExportError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    ///
    /// # Arguments
    /// * `markup` - Typst markup string
    ///
    /// # Returns
    /// PDF bytes on success
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        let engine = TypstEngine::builder().main_file(markup.to_string()).build();

        // compiled is Warned<Result<Document, Error>>
        // - compiled.output is the Result
        // - compiled.warnings contains any warnings
        let compiled = engine.compile();
        let document = compiled
            .output
            .map_err(|e| ExportError::Compile(format!("{e:?}")))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| ExportError::Compile(format!("PDF generation failed: {e:?}")))?;

        Ok(pdf_bytes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple() {
        let markup = "= Evaluation\n\nThis is a test document.";
        let result = Compiler::compile(markup);

        assert!(result.is_ok(), "compilation failed: {:?}", result.err());

        let pdf = result.unwrap();
        // PDF files start with %PDF
        assert!(
            pdf.starts_with(b"%PDF"),
            "output doesn't start with PDF header"
        );
    }

    #[test]
    fn test_compile_table_markup() {
        let markup = "#table(\n  columns: (40mm, 90mm, 30mm),\n  \
                      table.header([*A*], [*B*], [*C*]),\n  [1], [2], [3],\n)";
        let result = Compiler::compile(markup);
        assert!(result.is_ok(), "compilation failed: {:?}", result.err());
    }
}
