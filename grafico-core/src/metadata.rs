use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::GraficoError;

/// Per-symbol descriptive metadata from one bulk fetch.
///
/// A read-only field-by-symbol table: rows are field names (sector, website,
/// ...), columns are symbols. Lookup never mutates; a symbol simply lacking
/// a field reads as `None`, while asking for a field no symbol carries is a
/// key-not-found fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataTable {
    symbols: Vec<String>,
    by_symbol: BTreeMap<String, BTreeMap<String, String>>,
}

impl MetadataTable {
    /// Build from per-symbol field maps, keeping fetch order.
    #[must_use]
    pub fn new(entries: Vec<(String, BTreeMap<String, String>)>) -> Self {
        let symbols = entries.iter().map(|(s, _)| s.clone()).collect();
        let by_symbol = entries.into_iter().collect();
        Self { symbols, by_symbol }
    }

    /// Symbols in fetch order.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Sorted union of all field names present for any symbol.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .by_symbol
            .values()
            .flat_map(|m| m.keys().map(String::as_str))
            .collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    /// One field's value for one symbol.
    #[must_use]
    pub fn get(&self, symbol: &str, field: &str) -> Option<&str> {
        self.by_symbol
            .get(symbol)?
            .get(field)
            .map(String::as_str)
    }

    /// One field across every symbol, in fetch order.
    ///
    /// # Errors
    /// Returns `UnknownField` when no symbol carries the field at all.
    pub fn field_row(&self, field: &str) -> Result<Vec<(&str, Option<&str>)>, GraficoError> {
        if !self.by_symbol.values().any(|m| m.contains_key(field)) {
            return Err(GraficoError::unknown_field(field));
        }
        Ok(self
            .symbols
            .iter()
            .map(|s| (s.as_str(), self.get(s, field)))
            .collect())
    }

    /// True when the table holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
