use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of periods in the candlestick overlay's moving average.
pub const OVERLAY_WINDOW: usize = 200;

/// A rendering-ready chart trace in plotly-style shape.
///
/// Serializes to a tagged JSON object (`"type": "scatter"` /
/// `"type": "candlestick"`) that a charting surface can consume directly.
/// Non-finite y values serialize as `null`, which charting surfaces treat
/// as a gap in the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// A line trace: one y value per date.
    Scatter {
        /// Draw mode, always `"lines"` for series traces.
        mode: String,
        /// Date axis.
        x: Vec<NaiveDate>,
        /// Values, possibly normalized by the producing series.
        y: Vec<f64>,
        /// Legend label, usually the symbol.
        name: String,
        /// Fill color hint, used by moving-average overlays to stay in the
        /// same family as their candlestick's increasing color.
        #[serde(skip_serializing_if = "Option::is_none")]
        fillcolor: Option<String>,
    },
    /// An OHLC candlestick trace.
    Candlestick {
        /// Date axis.
        x: Vec<NaiveDate>,
        /// Opening prices.
        open: Vec<f64>,
        /// Daily highs.
        high: Vec<f64>,
        /// Daily lows.
        low: Vec<f64>,
        /// Closing prices.
        close: Vec<f64>,
        /// Legend label, usually the symbol.
        name: String,
        /// Line color for increasing days.
        increasing_line_color: String,
        /// Line color for decreasing days.
        decreasing_line_color: String,
    },
}

impl Trace {
    /// Build a plain line trace.
    #[must_use]
    pub fn lines(x: Vec<NaiveDate>, y: Vec<f64>, name: impl Into<String>) -> Self {
        Self::Scatter {
            mode: "lines".to_string(),
            x,
            y,
            name: name.into(),
            fillcolor: None,
        }
    }

    /// Legend label of the trace.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scatter { name, .. } | Self::Candlestick { name, .. } => name,
        }
    }

    /// Number of points along the date axis.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Scatter { x, .. } | Self::Candlestick { x, .. } => x.len(),
        }
    }

    /// True when the trace has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
