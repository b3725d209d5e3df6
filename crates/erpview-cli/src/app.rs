//! CLI Application logic
//!
//! Contains the command-line interface implementation. The command
//! functions write to a caller-supplied writer and the interactive menu
//! reads from a caller-supplied reader, so integration tests can drive
//! them with in-memory buffers.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use erpview_pdf::export_report;
use erpview_report::{MenuEntry, ReportMeta, REPORT};
use erpview_screens::{render_text, screen_for};

/// Output format for the view command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "erpview")]
#[command(author, version, about = "RIDERS TREND ERP evaluation report viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the report navigation menu
    Sections,

    /// Show one report section
    View {
        /// Menu entry, by name or label (e.g. "shortfall-risks")
        section: MenuEntry,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Export the full report as a PDF file
    Export {
        /// Output file (defaults to the report's download name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the report in an interactive session
    Menu,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let mut stdout = io::stdout();

    match cli.command {
        Commands::Sections => sections_command(&REPORT, &mut stdout)?,
        Commands::View { section, format } => {
            view_command(section, format, &REPORT, &mut stdout)?;
        }
        Commands::Export { output } => {
            export_command(output.as_deref(), &REPORT, &mut stdout)?;
        }
        Commands::Menu => {
            let stdin = io::stdin();
            let export_path = PathBuf::from(REPORT.export_file_name());
            run_menu(&mut stdin.lock(), &mut stdout, &REPORT, &export_path)?;
        }
    }

    Ok(())
}

/// Execute the sections command: list the closed menu entry set.
pub fn sections_command(meta: &ReportMeta, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} | {} | {}", meta.company, meta.author, meta.date)?;
    for entry in MenuEntry::ALL {
        writeln!(out, "  {}. {}  ({})", entry.position(), entry.label(), entry.name())?;
    }
    Ok(())
}

/// Execute the view command: render a single screen.
pub fn view_command(
    section: MenuEntry,
    format: OutputFormat,
    meta: &ReportMeta,
    out: &mut impl Write,
) -> Result<()> {
    debug!(section = section.name(), "rendering screen");
    let screen = screen_for(section, meta);

    match format {
        OutputFormat::Text => {
            write!(out, "{}", render_text(&screen))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&screen)
                .context("Failed to serialize screen to JSON")?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(())
}

/// Execute the export command: build the PDF and write it to disk.
///
/// Returns the path written.
pub fn export_command(
    output: Option<&Path>,
    meta: &ReportMeta,
    out: &mut impl Write,
) -> Result<PathBuf> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(meta.export_file_name()),
    };

    writeln!(out, "erpview v{}", erpview_report::VERSION)?;
    writeln!(out, "Exporting: {}", meta.document_title())?;

    let size = write_export(&path, meta)?;

    writeln!(out)?;
    writeln!(out, "Export complete!")?;
    writeln!(out, "  Output: {}", path.display())?;
    writeln!(out, "  Type: {}", erpview_pdf::MEDIA_TYPE)?;
    writeln!(out, "  Size: {size} bytes")?;

    Ok(path)
}

/// Build the PDF in memory and write it to `path`; returns the byte count.
fn write_export(path: &Path, meta: &ReportMeta) -> Result<usize> {
    debug!(path = %path.display(), "building PDF document");
    let bytes = export_report(meta).context("Failed to build the PDF document")?;
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(bytes.len())
}

/// Run the interactive menu session.
///
/// Each iteration reads one selection, renders that screen, and forgets the
/// selection again; nothing carries over between iterations. Unknown input
/// re-prompts instead of ending the session.
pub fn run_menu(
    input: &mut impl BufRead,
    out: &mut impl Write,
    meta: &ReportMeta,
    export_path: &Path,
) -> Result<()> {
    writeln!(out, "{}", meta.document_title())?;
    writeln!(out, "{} | {}", meta.author, meta.date)?;

    loop {
        writeln!(out)?;
        writeln!(out, "Report Navigation")?;
        for entry in MenuEntry::ALL {
            writeln!(out, "  {}. {}", entry.position(), entry.label())?;
        }
        write!(out, "Select section (1-7, q quits): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(entry) = parse_selection(trimmed) else {
            writeln!(out, "Unknown selection: {trimmed}")?;
            continue;
        };

        debug!(section = entry.name(), "menu selection");
        writeln!(out)?;
        write!(out, "{}", render_text(&screen_for(entry, meta)))?;

        if entry == MenuEntry::DownloadPdf {
            write!(out, "\nGenerate the PDF now? [y/N]: ")?;
            out.flush()?;
            match read_line(input)? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    let size = write_export(export_path, meta)?;
                    writeln!(out, "Saved {} ({size} bytes)", export_path.display())?;
                }
                Some(_) => {}
                None => break,
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

/// Resolve a menu selection: 1-based position, kebab-case name, or label.
fn parse_selection(input: &str) -> Option<MenuEntry> {
    if let Ok(position) = input.parse::<usize>() {
        return MenuEntry::from_position(position);
    }
    input.parse::<MenuEntry>().ok()
}

/// Read one line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
