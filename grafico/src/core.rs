use std::sync::Arc;

use chrono::{Days, Utc};
use grafico_core::{GraficoError, MarketDataSource, SymbolSet};

use crate::dashboard::Dashboard;

/// Days per "year back" of lookback. Deliberately a touch under a calendar
/// year so the query lands inside the provider's available range.
const DAYS_PER_YEAR_BACK: u64 = 356;

/// Configuration shared by the builder and the loaded application context.
#[derive(Debug, Clone)]
pub(crate) struct GraficoConfig {
    pub(crate) years_back: u64,
    pub(crate) fetch_metadata: bool,
    pub(crate) chart_seed: Option<u64>,
}

impl Default for GraficoConfig {
    fn default() -> Self {
        Self {
            years_back: 2,
            fetch_metadata: false,
            chart_seed: None,
        }
    }
}

/// Application context that fetches symbol data and hands out dashboards.
///
/// Constructed once at startup and passed to whatever registers the UI
/// handlers; there is no implicit global state.
pub struct Grafico {
    pub(crate) source: Arc<dyn MarketDataSource>,
    pub(crate) cfg: GraficoConfig,
}

/// Builder for constructing a [`Grafico`] context.
pub struct GraficoBuilder {
    source: Option<Arc<dyn MarketDataSource>>,
    cfg: GraficoConfig,
}

impl Default for GraficoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraficoBuilder {
    /// Create a new builder with defaults: two years of lookback, no
    /// metadata fetch, fresh chart colors per render.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: GraficoConfig::default(),
        }
    }

    /// Register the market data source. Required.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn MarketDataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the history lookback in years (each year is 356 fetch days).
    #[must_use]
    pub const fn years_back(mut self, years: u64) -> Self {
        self.cfg.years_back = years;
        self
    }

    /// Also fetch company metadata when loading.
    ///
    /// A metadata failure is a hard failure of the load; there is no
    /// partial result.
    #[must_use]
    pub const fn fetch_metadata(mut self, yes: bool) -> Self {
        self.cfg.fetch_metadata = yes;
        self
    }

    /// Pin candlestick colors to a deterministic sequence.
    ///
    /// Without a seed every figure render draws fresh colors from OS
    /// entropy, matching the throwaway-styling default of the dashboard.
    #[must_use]
    pub const fn chart_seed(mut self, seed: u64) -> Self {
        self.cfg.chart_seed = Some(seed);
        self
    }

    /// Finalize the context.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no source was registered or the lookback
    /// is zero.
    pub fn build(self) -> Result<Grafico, GraficoError> {
        let source = self
            .source
            .ok_or_else(|| GraficoError::InvalidArg("no market data source registered".into()))?;
        if self.cfg.years_back == 0 {
            return Err(GraficoError::InvalidArg(
                "lookback must be at least one year".into(),
            ));
        }
        Ok(Grafico {
            source,
            cfg: self.cfg,
        })
    }
}

impl Grafico {
    /// Begin building a context.
    #[must_use]
    pub fn builder() -> GraficoBuilder {
        GraficoBuilder::new()
    }

    /// Fetch and align history for `symbols`, producing a [`Dashboard`].
    ///
    /// One bulk history fetch over the configured lookback window, the
    /// drop-then-split alignment, and (when configured) one bulk metadata
    /// fetch. Any fetch failure aborts the whole load.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty symbol list and propagates source
    /// failures unchanged.
    pub async fn load(&self, symbols: &[String]) -> Result<Dashboard, GraficoError> {
        if symbols.is_empty() {
            return Err(GraficoError::InvalidArg(
                "no symbols specified for load".into(),
            ));
        }

        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_days(Days::new(self.cfg.years_back * DAYS_PER_YEAR_BACK))
            .ok_or_else(|| {
                GraficoError::InvalidArg(format!(
                    "lookback of {} years is out of range",
                    self.cfg.years_back
                ))
            })?;

        tracing::info!(source = self.source.name(), %start, %end, "loading symbol set");
        let raw = self.source.daily_history(symbols, start, end).await?;
        let set = SymbolSet::from_raw(&raw)?;
        tracing::debug!(
            symbols = set.len(),
            dates = set.date_index().len(),
            "aligned symbol set"
        );

        let metadata = if self.cfg.fetch_metadata {
            Some(self.source.company_metadata(symbols).await?)
        } else {
            None
        };

        Ok(Dashboard::new(set, metadata, self.cfg.chart_seed))
    }
}
