//! erpview-screens - Interactive viewer screens
//!
//! Each navigation menu entry maps to one static [`Screen`]: a pure
//! description of headings, callouts, lists, metric rows, tables, formulas,
//! and columns. Building a screen never touches the terminal; rendering is
//! a separate step so the same description can go out as plain text or as
//! JSON.
//!
//! # Example
//!
//! ```
//! use erpview_report::{MenuEntry, REPORT};
//! use erpview_screens::{render_text, screen_for};
//!
//! let screen = screen_for(MenuEntry::ExecutiveSummary, &REPORT);
//! let text = render_text(&screen);
//! assert!(text.contains("Executive Summary"));
//! ```

mod builders;
mod model;
mod text;

pub use builders::screen_for;
pub use model::{Callout, CalloutKind, Cell, Metric, PanelColumn, Screen, Table, Widget};
pub use text::render_text;
