use std::sync::Arc;

use async_trait::async_trait;

use grafico_core::GraficoError;
use yf::core::HistoryService;
use yfinance_rs as yf;

/// History abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, GraficoError>;
}

/// Profile abstraction for company metadata loads.
#[async_trait]
pub trait YfProfile: Send + Sync {
    /// Load a company/fund profile for `symbol`.
    async fn load(&self, symbol: &str) -> Result<yf::profile::Profile, GraficoError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a default `YfClient` with a recommended user agent.
    ///
    /// # Panics
    /// Panics if building the underlying `YfClient` fails, which is unexpected
    /// in normal environments (invalid user agent configuration).
    #[must_use]
    pub fn new_default() -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client for YfClient");
        Self {
            client: yf::YfClient::builder()
                .custom_client(http)
                .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36")
                .build()
                .expect("Failed to build YfClient with user agent"),
        }
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

pub(crate) fn map_yf_err(e: &yf::YfError, context: &str) -> GraficoError {
    match e {
        yf::YfError::NotFound { .. } => GraficoError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            GraficoError::source("grafico-yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => GraficoError::source(
            "grafico-yfinance",
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            GraficoError::source("grafico-yfinance", format!("status {status}: {context}"))
        }
        other => GraficoError::source("grafico-yfinance", other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, GraficoError> {
        // `YfClient` implements `HistoryService`, which we use directly.
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfProfile for RealAdapter {
    async fn load(&self, symbol: &str) -> Result<yf::profile::Profile, GraficoError> {
        yf::profile::load_profile(&self.client, symbol)
            .await
            .map_err(|e| map_yf_err(&e, &format!("profile for {symbol}")))
    }
}

/* -------- Lightweight adapter constructors for tests/injection ------- */

impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, GraficoError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, GraficoError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, GraficoError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

impl dyn YfProfile {
    /// Build a `YfProfile` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfProfile>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<yf::profile::Profile, GraficoError>,
    {
        struct FnProfile<F>(F);
        #[async_trait]
        impl<F> YfProfile for FnProfile<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<yf::profile::Profile, GraficoError>,
        {
            async fn load(&self, symbol: &str) -> Result<yf::profile::Profile, GraficoError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnProfile(f))
    }
}
