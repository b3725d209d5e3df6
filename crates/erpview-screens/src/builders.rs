//! Screen builders
//!
//! One pure function per menu entry. Builders read report constants and the
//! passed-in metadata; they hold no state and perform no I/O.

use erpview_report::{MenuEntry, Priority, ReportMeta, SHORTFALLS, SHORTFALL_HEADERS, WAGES_FORMULA};

use crate::model::{Callout, Cell, Metric, PanelColumn, Screen, Table, Widget};

/// Build the screen for a menu entry.
pub fn screen_for(entry: MenuEntry, meta: &ReportMeta) -> Screen {
    match entry {
        MenuEntry::ExecutiveSummary => executive_summary(meta),
        MenuEntry::TechnicalEvaluation => technical_evaluation(),
        MenuEntry::FunctionalModules => functional_modules(),
        MenuEntry::ShortfallRisks => shortfall_risks(),
        MenuEntry::ProductionWages => production_wages(),
        MenuEntry::Recommendations => recommendations(),
        MenuEntry::DownloadPdf => download_pdf(meta),
    }
}

fn executive_summary(meta: &ReportMeta) -> Screen {
    let mut screen = Screen::new("Executive Summary");
    screen.push(Widget::Callout(Callout::info(
        "ERP SUPPORTS BUSINESS OPERATION: FUNCTIONAL FIT",
    )));
    screen.push(Widget::Paragraph(format!(
        "This report evaluates the performance, functionality, and business \
         impact of the VB.NET-based ERP system implemented at {} Gloves \
         Manufacturing.",
        meta.company
    )));
    screen.push(Widget::Paragraph(
        "The ERP integrates major business operations including:".to_string(),
    ));
    screen.push(Widget::BulletList(owned(&[
        "Finance & Accounting: Fully covered.",
        "Inventory & Stocks: Working properly.",
        "Export & Sales: Working according to requirements.",
        "Imports: Fully active.",
        "Production: Running smoothly with fool-proof wages.",
        "HR & Payroll: Comprehensive reports based on machine attendance.",
    ])));
    screen.push(Widget::SubHeading("System Architecture".to_string()));
    screen.push(Widget::Metrics(vec![
        Metric::new("Platform", "VB.NET", "Windows Forms"),
        Metric::new("Database", "SQL Server", "Microsoft"),
        Metric::new("Architecture", "2-Tier", "Client-Server"),
    ]));
    screen
}

fn technical_evaluation() -> Screen {
    let mut screen = Screen::new("Technical & Performance Evaluation");
    screen.push(Widget::SubHeading("Performance & Reliability".to_string()));
    screen.push(Widget::NumberedList(owned(&[
        "Optimize database queries and indexes.",
        "Use high-performance servers.",
        "Regularly update ERP software for bug fixes.",
        "Implement healthy backup and disaster recovery strategies.",
    ])));
    screen.push(Widget::SubHeading(
        "Database Evaluation (SQL Server)".to_string(),
    ));
    screen.push(Widget::Callout(Callout::warning("Issues Identified:")));
    screen.push(Widget::BulletList(owned(&[
        "Data redundancy in some tables.",
        "Missing indexes leading to slow reports.",
        "Backup process is sometimes manual.",
    ])));
    screen.push(Widget::Callout(Callout::success(
        "Recommendation: Implement automated backups and optimize indexing.",
    )));
    screen
}

fn functional_modules() -> Screen {
    let mut screen = Screen::new("Functional Module Observations");

    screen.push(Widget::SubHeading("Accounting & Finance".to_string()));
    screen.push(Widget::Paragraph(
        "The module is central to the ERP system, integrating Sales, \
         Purchase, and HR."
            .to_string(),
    ));
    screen.push(Widget::BulletList(owned(&[
        "General Ledger: Auto-posts journal entries.",
        "Accounts Payable/Receivable: Tracks vendor invoices and customer aging.",
        "Taxation: Handles GST/VAT compliance.",
    ])));
    screen.push(Widget::Callout(Callout::info(
        "Observation: Strong for transaction processing, but reporting \
         flexibility requires customization.",
    )));

    screen.push(Widget::SubHeading("Inventory & Stocks".to_string()));
    screen.push(Widget::BulletList(owned(&[
        "Real-time updates: Stocks updated via GRN.",
        "BOM Integration: Materials issued according to BOM quantity.",
        "Gap: Reorder alerts are weak.",
    ])));

    screen.push(Widget::SubHeading("Sales & Export".to_string()));
    screen.push(Widget::Paragraph(
        "Manages customer database, order processing, and commercial \
         invoicing."
            .to_string(),
    ));
    screen.push(Widget::BulletList(owned(&[
        "Automated Billing: Generates invoices from confirmed sales orders.",
        "Debtor Tracking: Real-time visibility of outstanding aging.",
        "Gap: Lack of predictive analytics for payment delays.",
    ])));

    screen.push(Widget::SubHeading("Purchase Module".to_string()));
    screen.push(Widget::Paragraph(
        "Manages procurement, requisitions, and vendor ratings.".to_string(),
    ));
    screen.push(Widget::BulletList(owned(&[
        "Workflow: Requisition -> Vendor Selection -> PO -> GRN -> Invoice.",
        "Gap: Quotation comparison is partially manual.",
    ])));

    screen.push(Widget::SubHeading("Import Module".to_string()));
    screen.push(Widget::Paragraph(
        "Tracks imported goods and consumption based on approved formulas.".to_string(),
    ));
    screen.push(Widget::BulletList(owned(&[
        "Stock Update: Automatic update upon goods receipt.",
        "Compliance: Tracks customs duties and import documentation.",
    ])));

    screen
}

fn shortfall_risks() -> Screen {
    let mut screen = Screen::new("Critical Shortfall Report");

    let rows = SHORTFALLS
        .iter()
        .map(|row| {
            // High-priority cells stay conditionally emphasized even though
            // the fixed dataset is all High.
            let priority = if row.priority == Priority::High {
                Cell::emphasized(row.priority.label())
            } else {
                Cell::new(row.priority.label())
            };
            vec![
                Cell::new(row.module),
                Cell::new(row.shortfall),
                Cell::new(row.impact.unwrap_or("")),
                priority,
            ]
        })
        .collect();

    screen.push(Widget::Table(Table {
        headers: SHORTFALL_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }));

    screen.push(Widget::SubHeading("Risk Impact Assessment".to_string()));
    screen.push(Widget::BulletList(owned(&[
        "Costing Errors: Leads to financial loss.",
        "Inventory Inaccuracies: Causes production delays.",
        "Forecasting Gaps: Results in strategic inefficiency.",
    ])));
    screen
}

fn production_wages() -> Screen {
    let mut screen = Screen::new("Production & Wages");
    screen.push(Widget::SubHeading("Production Scope".to_string()));
    screen.push(Widget::Paragraph(
        "Manages planning, scheduling, BOM, MRP, and Quality Control.".to_string(),
    ));
    screen.push(Widget::SubHeading("Wages Calculation Formula".to_string()));
    screen.push(Widget::Paragraph(
        "The system calculates wages for production staff using the \
         following parameters:"
            .to_string(),
    ));
    screen.push(Widget::Formula(WAGES_FORMULA.to_string()));
    screen.push(Widget::Paragraph("Parameters:".to_string()));
    screen.push(Widget::BulletList(owned(&[
        "Employee Type: Skilled, Semi-skilled, Unskilled.",
        "Attendance: Biometric integration.",
        "Deductions: Absenteeism, late coming.",
    ])));
    screen
}

fn recommendations() -> Screen {
    let mut screen = Screen::new("Strategic Recommendations");
    screen.push(Widget::Columns(vec![
        PanelColumn {
            heading: "Short-Term".to_string(),
            badge: "Immediate".to_string(),
            items: owned(&[
                "Automate cost updates.",
                "Enable real-time stock valuation.",
                "Add budget alerts.",
            ]),
        },
        PanelColumn {
            heading: "Medium-Term".to_string(),
            badge: "6 Months".to_string(),
            items: owned(&[
                "Implement full MRP automation.",
                "Add BOM version control.",
                "Enhance HR legal reporting.",
            ]),
        },
        PanelColumn {
            heading: "Long-Term".to_string(),
            badge: "1 Year+".to_string(),
            items: owned(&[
                "AI-based material forecasting.",
                "Predictive KPI dashboards.",
            ]),
        },
    ]));
    screen.push(Widget::SubHeading("AI-Based Forecasting".to_string()));
    screen.push(Widget::Paragraph(
        "Using AI to analyze historical purchase and production data to \
         predict future material needs, reducing wastage and improving \
         profitability."
            .to_string(),
    ));
    screen
}

fn download_pdf(meta: &ReportMeta) -> Screen {
    let mut screen = Screen::new("Export Full Report");
    screen.push(Widget::Paragraph(format!(
        "Generate the official PDF report for {}.",
        meta.company
    )));
    screen.push(Widget::Paragraph(format!(
        "The document is built in memory and saved as {}.",
        meta.export_file_name()
    )));
    screen
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpview_report::{export_rows, REPORT};

    #[test]
    fn test_every_entry_builds_a_screen() {
        for entry in MenuEntry::ALL {
            let screen = screen_for(entry, &REPORT);
            assert!(!screen.title.is_empty());
            assert!(!screen.widgets.is_empty(), "{entry:?} built empty screen");
        }
    }

    #[test]
    fn test_shortfall_screen_table_shape() {
        let screen = screen_for(MenuEntry::ShortfallRisks, &REPORT);
        let table = screen
            .widgets
            .iter()
            .find_map(|w| match w {
                Widget::Table(t) => Some(t),
                _ => None,
            })
            .expect("shortfall screen has a table");

        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.rows.len(), 7);
        for row in &table.rows {
            assert_eq!(row.len(), 4);
        }
    }

    #[test]
    fn test_high_priority_cells_are_emphasized() {
        let screen = screen_for(MenuEntry::ShortfallRisks, &REPORT);
        if let Some(Widget::Table(table)) = screen.widgets.first() {
            for row in &table.rows {
                let priority = row.last().unwrap();
                assert_eq!(priority.text, "High");
                assert!(priority.emphasized);
            }
        } else {
            panic!("first widget should be the table");
        }
    }

    #[test]
    fn test_screen_table_covers_exported_rows() {
        // Every exported {module, shortfall, priority} triple must appear on
        // the interactive screen too.
        let screen = screen_for(MenuEntry::ShortfallRisks, &REPORT);
        let Some(Widget::Table(table)) = screen.widgets.first() else {
            panic!("first widget should be the table");
        };

        for row in export_rows() {
            assert!(
                table.rows.iter().any(|cells| cells[0].text == row.module
                    && cells[1].text == row.shortfall
                    && cells[3].text == row.priority.label()),
                "exported row missing on screen: {row:?}"
            );
        }
    }

    #[test]
    fn test_wages_screen_shows_formula_verbatim() {
        let screen = screen_for(MenuEntry::ProductionWages, &REPORT);
        assert!(screen
            .widgets
            .iter()
            .any(|w| matches!(w, Widget::Formula(f) if f == WAGES_FORMULA)));
    }

    #[test]
    fn test_recommendations_have_three_columns() {
        let screen = screen_for(MenuEntry::Recommendations, &REPORT);
        let Some(Widget::Columns(columns)) = screen.widgets.first() else {
            panic!("first widget should be the columns");
        };
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].badge, "Immediate");
        assert_eq!(columns[2].heading, "Long-Term");
    }

    #[test]
    fn test_download_screen_names_the_file() {
        let screen = screen_for(MenuEntry::DownloadPdf, &REPORT);
        let text = format!("{screen:?}");
        assert!(text.contains("ERP_Evaluation_Riders_Trend.pdf"));
    }
}
