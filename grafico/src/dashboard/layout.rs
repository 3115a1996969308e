use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Declarative description of the dashboard UI.
///
/// The rendering host walks this tree and wires each control's events back
/// into the matching [`Dashboard`](crate::Dashboard) handler; nothing here
/// is interactive by itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Top-to-bottom panels.
    pub panels: Vec<Panel>,
}

/// One titled panel: explanatory notes, input controls, and a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Stable identifier the host uses to route events.
    pub id: String,
    /// Heading shown above the panel.
    pub title: String,
    /// Bullet notes explaining the chart to the analyst.
    pub notes: Vec<String>,
    /// Input controls, in display order.
    pub controls: Vec<Control>,
}

/// An input or output control inside a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    /// Multi-select symbol dropdown.
    SymbolDropdown {
        /// Control identifier.
        id: String,
        /// Selectable symbols, in set insertion order.
        options: Vec<String>,
        /// Whether multiple symbols can be selected.
        multi: bool,
    },
    /// Date range picker bounded by the loaded date index.
    DateRangePicker {
        /// Control identifier.
        id: String,
        /// Earliest selectable date.
        min_date: NaiveDate,
        /// Latest selectable date.
        max_date: NaiveDate,
        /// Display format hint for the host.
        display_format: String,
    },
    /// Graph output surface fed by a handler's [`Figure`](crate::Figure).
    Graph {
        /// Control identifier.
        id: String,
    },
}
