//! Report to Typst markup transpiler
//!
//! Converts the report content into Typst markup implementing the document
//! layout: a bold title header and a "Page N" footer on every page, shaded
//! chapter-title blocks, word-wrapped bodies, and the fixed-width bordered
//! shortfall table. Page breaks happen in the engine whenever content
//! overflows; the markup never positions anything absolutely.
//!
//! The markup is a pure function of the report constants. No timestamps or
//! other ambient state leak in, so transpiling twice yields identical
//! output.

use erpview_report::{export_rows, export_sections, ReportMeta, SectionContent};

use crate::error::{ExportError, Result};

/// Transpiler for converting the report to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile the report to Typst markup.
    ///
    /// Fails with [`ExportError::Encoding`] if any content string carries a
    /// character outside the supported text encoding.
    pub fn transpile(meta: &ReportMeta) -> Result<String> {
        let sections = export_sections(meta);

        ensure_encodable("report metadata", meta.company)?;
        ensure_encodable("report metadata", meta.author)?;
        ensure_encodable("report metadata", meta.date)?;
        for section in &sections {
            ensure_encodable(&section.title, &section.title)?;
            if let SectionContent::Text(body) = &section.content {
                ensure_encodable(&section.title, body)?;
            }
        }
        for row in export_rows() {
            ensure_encodable("shortfall table", row.module)?;
            ensure_encodable("shortfall table", row.shortfall)?;
        }

        let mut output = String::new();
        output.push_str(&Self::preamble(meta));

        for section in &sections {
            output.push_str(&Self::chapter_title(&section.title));
            match &section.content {
                SectionContent::Text(body) => output.push_str(&Self::chapter_body(body)),
                SectionContent::ShortfallTable => output.push_str(&Self::shortfall_table()),
            }
        }

        Ok(output)
    }

    /// Document metadata and page setup.
    ///
    /// The header and footer are page-level rules, so every page the engine
    /// creates gets them without the body markup knowing about pagination.
    /// `date: none` keeps the output free of non-deterministic metadata.
    fn preamble(meta: &ReportMeta) -> String {
        let title = meta.document_title();
        format!(
            "#set document(title: \"{}\", author: \"{}\", date: none)\n\
             #set page(\n\
             \x20 paper: \"a4\",\n\
             \x20 margin: (x: 15mm, top: 25mm, bottom: 20mm),\n\
             \x20 header: align(center, text(weight: \"bold\", size: 12pt, \"{}\")),\n\
             \x20 footer: align(center, text(style: \"italic\", size: 8pt)[Page #context counter(page).display()]),\n\
             )\n\
             #set text(size: 11pt)\n\
             #set par(leading: 3mm)\n\n",
            escape_string(&title),
            escape_string(meta.author),
            escape_string(&title),
        )
    }

    /// A chapter title: full-width light-blue cell, bold, left-aligned.
    ///
    /// The title goes in as a string, not markup, so numbered titles like
    /// "1. Executive Summary" stay literal text.
    fn chapter_title(title: &str) -> String {
        format!(
            "#block(\n\
             \x20 width: 100%,\n\
             \x20 height: 10mm,\n\
             \x20 fill: rgb(200, 220, 255),\n\
             \x20 inset: (x: 2mm),\n\
             \x20 align(horizon, text(weight: \"bold\", size: 12pt, \"{}\")),\n\
             )\n\
             #v(4mm)\n\n",
            escape_string(title)
        )
    }

    /// A body block: literal line breaks honored, wrapped by the engine.
    fn chapter_body(body: &str) -> String {
        let lines: Vec<String> = body.lines().map(|line| escape_markup(line)).collect();
        format!("{}\n#v(4mm)\n\n", lines.join(" \\\n"))
    }

    /// The bordered 3-column shortfall table with its bold header row.
    fn shortfall_table() -> String {
        let mut output = String::new();
        output.push_str(
            "#table(\n\
             \x20 columns: (40mm, 90mm, 30mm),\n\
             \x20 rows: 10mm,\n\
             \x20 align: horizon,\n\
             \x20 stroke: 0.5pt,\n\
             \x20 table.header([*Module*], [*Shortfall*], [*Priority*]),\n",
        );
        for row in export_rows() {
            output.push_str(&format!(
                "  [{}], [{}], [{}],\n",
                escape_markup(row.module),
                escape_markup(row.shortfall),
                escape_markup(row.priority.label()),
            ));
        }
        output.push_str(")\n#v(10mm)\n\n");
        output
    }
}

/// Reject characters the text encoding cannot carry.
///
/// Embedded newlines are content (they become line breaks); every other
/// control character is a corrupt constant and fails the export.
fn ensure_encodable(section: &str, text: &str) -> Result<()> {
    for ch in text.chars() {
        if ch.is_control() && ch != '\n' {
            return Err(ExportError::Encoding {
                section: section.to_string(),
                detail: format!("control character U+{:04X}", ch as u32),
            });
        }
    }
    Ok(())
}

/// Escape special characters for Typst string literals
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape markup-active characters so content renders verbatim
fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' | '#' | '$' | '[' | ']' | '{' | '}' | '*' | '_' | '`' | '<' | '>' | '@' | '~'
            | '=' | '-' | '+' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
