use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::GraficoError;

/// One complete daily OHLCV row.
///
/// Values are plain `f64`; volume is stored as a count but read back as a
/// float column so every field goes through the same accessor path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Opening price for the day.
    pub open: f64,
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
    /// Closing price for the day.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Bar {
    /// Read one field of the bar.
    #[must_use]
    pub const fn field(&self, field: Field) -> f64 {
        match field {
            Field::Open => self.open,
            Field::High => self.high,
            Field::Low => self.low,
            Field::Close => self.close,
            Field::Volume => self.volume,
        }
    }

    /// True when every field is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// A provider-side row where any field may be missing.
///
/// Only exists on the source boundary; [`crate::SymbolSet::from_raw`] drops
/// every date that does not complete for all requested symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawBar {
    /// Opening price, if reported.
    pub open: Option<f64>,
    /// Daily high, if reported.
    pub high: Option<f64>,
    /// Daily low, if reported.
    pub low: Option<f64>,
    /// Closing price, if reported.
    pub close: Option<f64>,
    /// Traded volume, if reported.
    pub volume: Option<f64>,
}

impl RawBar {
    /// Promote to a [`Bar`] when every field is present and finite.
    #[must_use]
    pub fn complete(&self) -> Option<Bar> {
        let bar = Bar {
            open: self.open?,
            high: self.high?,
            low: self.low?,
            close: self.close?,
            volume: self.volume?,
        };
        bar.is_finite().then_some(bar)
    }
}

/// The OHLCV columns a series exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Opening price.
    Open,
    /// Daily high.
    High,
    /// Daily low.
    Low,
    /// Closing price.
    Close,
    /// Traded volume.
    Volume,
}

impl Field {
    /// Canonical lowercase column name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        }
    }

    /// All columns, in OHLCV order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Open, Self::High, Self::Low, Self::Close, Self::Volume]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = GraficoError;

    /// Case-insensitive column lookup; unknown names are the key-not-found
    /// fault for string-keyed access.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            "volume" => Ok(Self::Volume),
            _ => Err(GraficoError::unknown_field(s)),
        }
    }
}

/// Result of one bulk history fetch: per-symbol daily rows keyed by date,
/// kept in requested symbol order.
#[derive(Debug, Clone, Default)]
pub struct RawHistory {
    entries: Vec<(String, BTreeMap<NaiveDate, RawBar>)>,
}

impl RawHistory {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one symbol's rows.
    ///
    /// # Errors
    /// Returns an error if the symbol is already present; a bulk fetch must
    /// not report the same symbol twice.
    pub fn push_symbol(
        &mut self,
        symbol: impl Into<String>,
        rows: BTreeMap<NaiveDate, RawBar>,
    ) -> Result<(), GraficoError> {
        let symbol = symbol.into();
        if self.entries.iter().any(|(s, _)| *s == symbol) {
            return Err(GraficoError::InvalidArg(format!(
                "duplicate symbol '{symbol}' in raw history"
            )));
        }
        self.entries.push((symbol, rows));
        Ok(())
    }

    /// Symbols in fetch order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    /// Per-symbol entries in fetch order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeMap<NaiveDate, RawBar>)> {
        self.entries.iter().map(|(s, rows)| (s.as_str(), rows))
    }

    /// Number of symbols in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no symbol was fetched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
