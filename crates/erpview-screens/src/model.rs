//! Screen description model
//!
//! A [`Screen`] is a flat list of widgets. The model is deliberately
//! presentation-agnostic: builders fill it from report constants, renderers
//! decide what a callout or an emphasized cell looks like on their medium.

use serde::{Deserialize, Serialize};

/// A complete static screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Page title
    pub title: String,
    /// Widgets in display order
    pub widgets: Vec<Widget>,
}

impl Screen {
    /// Create an empty screen with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            widgets: Vec::new(),
        }
    }

    /// Append a widget
    pub fn push(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }
}

/// One visual element of a screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// A highlighted status box
    Callout(Callout),
    /// Plain body text
    Paragraph(String),
    /// A second-level heading
    SubHeading(String),
    /// An unordered list
    BulletList(Vec<String>),
    /// An ordered list
    NumberedList(Vec<String>),
    /// A row of label/value/detail triples
    Metrics(Vec<Metric>),
    /// A bordered data table
    Table(Table),
    /// A formula, displayed as literal text
    Formula(String),
    /// Side-by-side labelled panels
    Columns(Vec<PanelColumn>),
}

/// Status box kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Success,
    Warning,
}

/// A highlighted status box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub kind: CalloutKind,
    pub text: String,
}

impl Callout {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Warning,
            text: text.into(),
        }
    }
}

/// One label/value/detail triple of a metrics row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub detail: String,
}

impl Metric {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            detail: detail.into(),
        }
    }
}

/// A bordered data table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header row
    pub headers: Vec<String>,
    /// Data rows; each row has one cell per header
    pub rows: Vec<Vec<Cell>>,
}

/// One table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    /// Visually highlighted by the renderer
    #[serde(default)]
    pub emphasized: bool,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// A labelled panel of the columns widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelColumn {
    /// Panel heading
    pub heading: String,
    /// Short badge under the heading ("Immediate", "6 Months", ...)
    pub badge: String,
    /// Bulleted panel content
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_push() {
        let mut screen = Screen::new("Test");
        screen.push(Widget::Paragraph("body".to_string()));
        assert_eq!(screen.widgets.len(), 1);
    }

    #[test]
    fn test_cell_constructors() {
        assert!(!Cell::new("a").emphasized);
        assert!(Cell::emphasized("a").emphasized);
    }

    #[test]
    fn test_widget_serializes_with_tag() {
        let widget = Widget::Paragraph("hello".to_string());
        let json = serde_json::to_string(&widget).unwrap();
        assert!(json.contains("paragraph"));
    }

    #[test]
    fn test_screen_round_trips_through_json() {
        let mut screen = Screen::new("Round Trip");
        screen.push(Widget::Callout(Callout::info("status")));
        screen.push(Widget::Table(Table {
            headers: vec!["A".to_string()],
            rows: vec![vec![Cell::emphasized("x")]],
        }));

        let json = serde_json::to_string(&screen).unwrap();
        let back: Screen = serde_json::from_str(&json).unwrap();
        assert_eq!(back, screen);
    }
}
