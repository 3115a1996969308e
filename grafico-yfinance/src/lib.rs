//! grafico-yfinance
//!
//! Yahoo Finance data source for the grafico ecosystem, implemented on top
//! of the `yfinance-rs` client library. Serves the two fetches the core
//! needs: bulk daily OHLCV history and per-symbol company metadata.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::collections::BTreeMap;
use std::sync::Arc;

use adapter::{RealAdapter, YfHistory, YfProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use grafico_core::{GraficoError, MarketDataSource, MetadataTable, RawBar, RawHistory};
use paft::market::requests::history::Interval;
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

/// Yahoo Finance source. Production users construct with
/// [`YfSource::new_default`]; tests inject fake adapters via
/// [`YfSource::from_adapters`].
pub struct YfSource {
    history: Arc<dyn YfHistory>,
    profile: Arc<dyn YfProfile>,
}

impl YfSource {
    /// Build with a fresh `yfinance_rs::YfClient` inside.
    #[must_use]
    pub fn new_default() -> Self {
        let adapter = Arc::new(RealAdapter::new_default());
        Self {
            history: Arc::clone(&adapter) as Arc<dyn YfHistory>,
            profile: adapter,
        }
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yf::YfClient) -> Self {
        let adapter = Arc::new(RealAdapter::new(client));
        Self {
            history: Arc::clone(&adapter) as Arc<dyn YfHistory>,
            profile: adapter,
        }
    }

    /// For tests/injection.
    #[must_use]
    pub fn from_adapters(history: Arc<dyn YfHistory>, profile: Arc<dyn YfProfile>) -> Self {
        Self { history, profile }
    }

    fn daily_request(start: NaiveDate, end: NaiveDate) -> yf::core::services::HistoryRequest {
        let to_ts = |d: NaiveDate| d.and_hms_opt(0, 0, 0).map_or(0, |t| t.and_utc().timestamp());
        yf::core::services::HistoryRequest {
            range: None,
            period: Some((to_ts(start), to_ts(end))),
            interval: Interval::D1,
            include_prepost: false,
            include_actions: false,
            auto_adjust: false,
            keepna: false,
        }
    }
}

#[async_trait]
impl MarketDataSource for YfSource {
    fn name(&self) -> &'static str {
        "grafico-yfinance"
    }

    async fn daily_history(
        &self,
        symbols: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawHistory, GraficoError> {
        tracing::info!(symbols = symbols.len(), %start, %end, "fetching daily history");
        let mut raw = RawHistory::new();
        // One provider call per symbol, sequentially; this is an analyst
        // tool, not a server under load.
        for symbol in symbols {
            let resp = self
                .history
                .fetch_full(symbol, Self::daily_request(start, end))
                .await?;
            raw.push_symbol(symbol.clone(), candles_to_rows(&resp))?;
        }
        Ok(raw)
    }

    async fn company_metadata(&self, symbols: &[String]) -> Result<MetadataTable, GraficoError> {
        tracing::info!(symbols = symbols.len(), "making metadata query");
        let mut entries = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let profile = self.profile.load(symbol).await?;
            entries.push((symbol.clone(), profile_fields(&profile)));
        }
        Ok(MetadataTable::new(entries))
    }
}

fn candles_to_rows(resp: &yf::HistoryResponse) -> BTreeMap<NaiveDate, RawBar> {
    resp.candles
        .iter()
        .map(|c| {
            (
                c.ts.date_naive(),
                RawBar {
                    open: c.open.amount().to_f64(),
                    high: c.high.amount().to_f64(),
                    low: c.low.amount().to_f64(),
                    close: c.close.amount().to_f64(),
                    volume: c.volume.map(|v| v as f64),
                },
            )
        })
        .collect()
}

#[allow(clippy::wildcard_enum_match_arm)]
fn profile_fields(profile: &yf::profile::Profile) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    match profile {
        yf::profile::Profile::Company(c) => {
            fields.insert("name".to_string(), c.name.clone());
            let optional = [
                ("sector", c.sector.as_ref()),
                ("industry", c.industry.as_ref()),
                ("website", c.website.as_ref()),
                ("summary", c.summary.as_ref()),
            ];
            for (key, value) in optional {
                if let Some(v) = value {
                    fields.insert(key.to_string(), v.clone());
                }
            }
        }
        // Fund and future profile kinds carry no fields we tabulate.
        _ => {}
    }
    fields
}
