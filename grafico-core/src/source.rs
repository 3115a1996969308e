use async_trait::async_trait;
use chrono::NaiveDate;

use crate::metadata::MetadataTable;
use crate::types::RawHistory;
use crate::GraficoError;

/// The external data-source boundary.
///
/// The core only needs two things from a provider: a bulk daily-history
/// fetch over a symbol list and date range, and a bulk metadata fetch. Both
/// block until the provider responds; failures surface as [`GraficoError`]
/// and abort the requesting operation — there is no retry or partial-failure
/// handling at this boundary.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Stable source name used to tag errors and log lines.
    fn name(&self) -> &'static str;

    /// Fetch daily OHLCV rows for every symbol over `[start, end)`.
    ///
    /// The returned table preserves the requested symbol order. Dates a
    /// provider cannot serve for a symbol are simply absent from that
    /// symbol's rows; alignment happens later in
    /// [`SymbolSet::from_raw`](crate::SymbolSet::from_raw).
    ///
    /// # Errors
    /// Any provider failure (unreachable network, unknown symbol) is a hard
    /// failure of the fetch.
    async fn daily_history(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawHistory, GraficoError>;

    /// Fetch per-symbol company metadata in one bulk call.
    ///
    /// # Errors
    /// Any provider failure is a hard failure of the fetch.
    async fn company_metadata(&self, symbols: &[String]) -> Result<MetadataTable, GraficoError>;
}
