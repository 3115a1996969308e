use async_trait::async_trait;
use chrono::NaiveDate;
use grafico_core::{GraficoError, MarketDataSource, MetadataTable, RawHistory};

mod fixtures;

/// Mock source for CI-safe examples and tests. Serves deterministic data
/// from static fixtures; unknown symbols are a hard not-found failure, the
/// way a real provider surfaces them.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), GraficoError> {
        if symbol == "FAIL" {
            return Err(GraficoError::source(
                "grafico-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MarketDataSource for MockSource {
    fn name(&self) -> &'static str {
        "grafico-mock"
    }

    async fn daily_history(
        &self,
        symbols: &[String],
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<RawHistory, GraficoError> {
        // Fixtures are served in full regardless of the requested window;
        // the data predates any wall-clock lookback and trimming it against
        // one would make tests depend on the current date.
        let mut raw = RawHistory::new();
        for symbol in symbols {
            Self::maybe_fail(symbol, "history")?;
            let rows = fixtures::history::by_symbol(symbol)
                .ok_or_else(|| GraficoError::not_found(format!("history for {symbol}")))?;
            raw.push_symbol(symbol.clone(), rows)?;
        }
        Ok(raw)
    }

    async fn company_metadata(&self, symbols: &[String]) -> Result<MetadataTable, GraficoError> {
        let mut entries = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            Self::maybe_fail(symbol, "metadata")?;
            let info = fixtures::profile::by_symbol(symbol)
                .ok_or_else(|| GraficoError::not_found(format!("metadata for {symbol}")))?;
            entries.push((symbol.clone(), info));
        }
        Ok(MetadataTable::new(entries))
    }
}
