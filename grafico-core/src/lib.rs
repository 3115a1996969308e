//! grafico-core
//!
//! Core types and alignment logic shared across the grafico ecosystem.
//!
//! - `types`: OHLCV bars, field names, and the raw bulk-fetch table.
//! - `series` / `set`: immutable per-symbol series and aligned symbol sets,
//!   with normalization-on-read, slicing, ratios, and trace generation.
//! - `source`: the `MarketDataSource` trait the connectors implement.
//! - `trace` / `palette`: plotly-style trace structures and the seedable
//!   candlestick color source.
//!
//! Everything here is synchronous value manipulation except the
//! `MarketDataSource` boundary, which assumes a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Unified workspace error type.
pub mod error;
/// Per-symbol metadata table.
pub mod metadata;
/// Seedable candlestick color generation.
pub mod palette;
/// One symbol's OHLCV series and its transformations.
pub mod series;
/// Aligned multi-symbol sets.
pub mod set;
/// The external data-source trait.
pub mod source;
/// Rolling and normalization helpers.
pub mod timeseries;
/// Renderable chart traces.
pub mod trace;
/// OHLCV rows and the raw bulk-fetch table.
pub mod types;

pub use error::GraficoError;
pub use metadata::MetadataTable;
pub use palette::{CandleColors, CandlePalette};
pub use series::SymbolSeries;
pub use set::{FieldTable, SymbolSet};
pub use source::MarketDataSource;
pub use timeseries::{normalize_anchored, rolling_mean};
pub use trace::{OVERLAY_WINDOW, Trace};
pub use types::{Bar, Field, RawBar, RawHistory};
