//! Plain-text screen renderer
//!
//! Turns a [`Screen`] into terminal-ready text. Tables get ASCII borders,
//! callouts get a severity tag, emphasized cells are wrapped in `*`.

use std::fmt::Write;

use crate::model::{Callout, CalloutKind, Cell, Metric, PanelColumn, Screen, Table, Widget};

/// Render a screen as plain text.
pub fn render_text(screen: &Screen) -> String {
    let mut out = String::new();
    out.push_str(&screen.title);
    out.push('\n');
    out.push_str(&"=".repeat(screen.title.chars().count()));
    out.push('\n');

    for widget in &screen.widgets {
        out.push('\n');
        render_widget(&mut out, widget);
    }

    out
}

fn render_widget(out: &mut String, widget: &Widget) {
    match widget {
        Widget::Callout(callout) => render_callout(out, callout),
        Widget::Paragraph(text) => {
            out.push_str(text);
            out.push('\n');
        }
        Widget::SubHeading(text) => {
            out.push_str(text);
            out.push('\n');
            out.push_str(&"-".repeat(text.chars().count()));
            out.push('\n');
        }
        Widget::BulletList(items) => {
            for item in items {
                let _ = writeln!(out, "  - {item}");
            }
        }
        Widget::NumberedList(items) => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "  {}. {item}", i + 1);
            }
        }
        Widget::Metrics(metrics) => render_metrics(out, metrics),
        Widget::Table(table) => render_table(out, table),
        Widget::Formula(formula) => {
            let _ = writeln!(out, "    {formula}");
        }
        Widget::Columns(columns) => render_columns(out, columns),
    }
}

fn render_callout(out: &mut String, callout: &Callout) {
    let tag = match callout.kind {
        CalloutKind::Info => "[INFO]",
        CalloutKind::Success => "[ OK ]",
        CalloutKind::Warning => "[WARN]",
    };
    let _ = writeln!(out, "{tag} {}", callout.text);
}

fn render_metrics(out: &mut String, metrics: &[Metric]) {
    let label_width = metrics
        .iter()
        .map(|m| m.label.chars().count())
        .max()
        .unwrap_or(0);
    for metric in metrics {
        let _ = writeln!(
            out,
            "  {:<label_width$}  {} ({})",
            metric.label, metric.value, metric.detail
        );
    }
}

fn render_columns(out: &mut String, columns: &[PanelColumn]) {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} [{}]", column.heading, column.badge);
        for item in &column.items {
            let _ = writeln!(out, "  - {item}");
        }
    }
}

fn render_table(out: &mut String, table: &Table) {
    let widths = column_widths(table);
    let separator = separator_line(&widths);

    out.push_str(&separator);
    render_row_line(
        out,
        &widths,
        table.headers.iter().map(|h| h.to_string()).collect(),
    );
    out.push_str(&separator);
    for row in &table.rows {
        render_row_line(out, &widths, row.iter().map(cell_text).collect());
    }
    out.push_str(&separator);
}

fn cell_text(cell: &Cell) -> String {
    if cell.emphasized {
        format!("*{}*", cell.text)
    } else {
        cell.text.clone()
    }
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (j, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(j) {
                *width = (*width).max(cell_text(cell).chars().count());
            }
        }
    }
    widths
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn render_row_line(out: &mut String, widths: &[usize], cells: Vec<String>) {
    out.push('|');
    for (j, width) in widths.iter().enumerate() {
        let text = cells.get(j).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(text.chars().count());
        out.push(' ');
        out.push_str(text);
        out.push_str(&" ".repeat(pad));
        out.push_str(" |");
    }
    out.push('\n');
}
