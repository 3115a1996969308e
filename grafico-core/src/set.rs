use std::collections::HashSet;

use chrono::NaiveDate;

use crate::palette::CandlePalette;
use crate::series::SymbolSeries;
use crate::trace::Trace;
use crate::types::{Field, RawHistory};
use crate::GraficoError;

/// An aligned collection of [`SymbolSeries`], one per symbol.
///
/// After [`from_raw`](Self::from_raw) every member shares an identical date
/// index: any date on which any symbol had a missing or non-finite value is
/// dropped before the split. Subsetting and slicing produce new sets and
/// preserve symbol insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSet {
    members: Vec<SymbolSeries>,
}

/// One field across every symbol of a set, as parallel columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTable {
    /// Shared date index.
    pub dates: Vec<NaiveDate>,
    /// `(symbol, values)` columns in set insertion order; values are read
    /// through each series' own normalization setting.
    pub columns: Vec<(String, Vec<f64>)>,
}

impl SymbolSet {
    /// Drop-then-split construction from a bulk fetch.
    ///
    /// Keeps exactly the dates where every symbol has a complete, finite
    /// bar, then splits the pruned table into per-symbol series that share
    /// the resulting index.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the fetch contains no symbols.
    pub fn from_raw(raw: &RawHistory) -> Result<Self, GraficoError> {
        if raw.is_empty() {
            return Err(GraficoError::InvalidArg(
                "raw history contains no symbols".into(),
            ));
        }

        // A date survives only if it completes for every symbol.
        let mut entries = raw.entries();
        let (_, first_rows) = entries.next().expect("checked non-empty above");
        let mut shared: Vec<NaiveDate> = first_rows
            .iter()
            .filter(|(_, bar)| bar.complete().is_some())
            .map(|(d, _)| *d)
            .collect();
        for (_, rows) in entries {
            shared.retain(|d| rows.get(d).is_some_and(|bar| bar.complete().is_some()));
        }

        let members = raw
            .entries()
            .map(|(symbol, rows)| {
                let bars = shared
                    .iter()
                    .map(|d| {
                        rows.get(d)
                            .and_then(|bar| bar.complete())
                            .expect("date retained only when complete for every symbol")
                    })
                    .collect();
                SymbolSeries::new(symbol, shared.clone(), bars)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { members })
    }

    /// Construction from already-aligned members.
    ///
    /// Skips the drop/split step; the caller guarantees the members share a
    /// date index. Only symbol uniqueness is validated.
    ///
    /// # Errors
    /// Returns `InvalidArg` on duplicate symbols.
    pub fn from_members(members: Vec<SymbolSeries>) -> Result<Self, GraficoError> {
        let mut seen = HashSet::new();
        for m in &members {
            if !seen.insert(m.symbol().to_string()) {
                return Err(GraficoError::InvalidArg(format!(
                    "duplicate symbol '{}' in symbol set",
                    m.symbol()
                )));
            }
        }
        Ok(Self { members })
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(SymbolSeries::symbol)
    }

    /// Member series in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &SymbolSeries> {
        self.members.iter()
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member series.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&SymbolSeries> {
        self.members.iter().find(|m| m.symbol() == symbol)
    }

    /// Look up a member series, failing loudly for absent symbols.
    ///
    /// # Errors
    /// Returns `NotFound` when the symbol is not in the set.
    pub fn series(&self, symbol: &str) -> Result<&SymbolSeries, GraficoError> {
        self.get(symbol)
            .ok_or_else(|| GraficoError::not_found(format!("series for {symbol}")))
    }

    /// The shared date index (empty for an empty set).
    #[must_use]
    pub fn date_index(&self) -> &[NaiveDate] {
        self.members.first().map_or(&[], |m| m.dates())
    }

    /// New set holding only the requested symbols, unchanged and in the
    /// requested order.
    ///
    /// # Errors
    /// Returns `NotFound` when any requested symbol is absent.
    pub fn subset_by_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Self, GraficoError> {
        let members = symbols
            .iter()
            .map(|s| self.series(s.as_ref()).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_members(members)
    }

    /// New set with every member sliced to `[start, end]`, defaulting to the
    /// set's own date bounds when a side is omitted.
    #[must_use]
    pub fn subset_by_time_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let index = self.date_index();
        let start = start.or_else(|| index.first().copied());
        let end = end.or_else(|| index.last().copied());
        Self {
            members: self
                .members
                .iter()
                .map(|m| m.slice_time_range(start, end))
                .collect(),
        }
    }

    /// Line traces for one field, one per member, in insertion order.
    #[must_use]
    pub fn line_traces(&self, field: Field) -> Vec<Trace> {
        self.members.iter().map(|m| m.line_trace(field)).collect()
    }

    /// Flattened candlestick trace pairs in insertion order.
    #[must_use]
    pub fn candlestick_traces(&self, palette: &mut CandlePalette) -> Vec<Trace> {
        self.members
            .iter()
            .flat_map(|m| m.candlestick_traces(palette))
            .collect()
    }

    /// One field across all members as a single table.
    #[must_use]
    pub fn field_table(&self, field: Field) -> FieldTable {
        FieldTable {
            dates: self.date_index().to_vec(),
            columns: self
                .members
                .iter()
                .map(|m| (m.symbol().to_string(), m.values(field)))
                .collect(),
        }
    }

    /// Ratio series between two members.
    ///
    /// # Errors
    /// Returns `NotFound` when either symbol is absent.
    pub fn ratio_of(&self, sym1: &str, sym2: &str) -> Result<SymbolSeries, GraficoError> {
        Ok(self.series(sym1)?.ratio(self.series(sym2)?))
    }
}
