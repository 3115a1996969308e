//! grafico
//!
//! Application layer of the grafico ecosystem: a builder-configured context
//! that fetches and aligns multi-symbol price history through a pluggable
//! [`MarketDataSource`](grafico_core::MarketDataSource), then hands out an
//! immutable [`Dashboard`] whose handlers turn UI selections into
//! renderable figures.
//!
//! ```no_run
//! use std::sync::Arc;
//! use grafico::Grafico;
//! use grafico_yfinance::YfSource;
//!
//! # async fn run() -> Result<(), grafico_core::GraficoError> {
//! let grafico = Grafico::builder()
//!     .with_source(Arc::new(YfSource::new_default()))
//!     .fetch_metadata(true)
//!     .build()?;
//! let dashboard = grafico.load(&["AG".into(), "EXK".into()]).await?;
//! let figure = dashboard.line_figure(&["AG"], None, None)?;
//! println!("{}", serde_json::to_string_pretty(&figure).unwrap());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

/// The `Grafico` context and its builder.
pub mod core;
/// The loaded dashboard: layout description and figure handlers.
pub mod dashboard;

pub use core::{Grafico, GraficoBuilder};
pub use dashboard::{Control, Dashboard, DashboardLayout, Figure, FigureLayout, Panel};
