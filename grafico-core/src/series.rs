use chrono::NaiveDate;

use crate::palette::CandlePalette;
use crate::timeseries::{normalize_anchored, rolling_mean};
use crate::trace::{OVERLAY_WINDOW, Trace};
use crate::types::{Bar, Field};
use crate::GraficoError;

/// One symbol's time-indexed OHLCV table.
///
/// Immutable value object: slicing, ratios, and share scaling all return new
/// instances. The date index is strictly increasing; gaps are whatever the
/// source data carried, the series itself never introduces any.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSeries {
    symbol: String,
    dates: Vec<NaiveDate>,
    bars: Vec<Bar>,
    normalize: bool,
}

impl SymbolSeries {
    /// Build a series from parallel date and bar vectors.
    ///
    /// Normalization-on-read starts enabled, matching the comparison-chart
    /// default; use [`with_normalize`](Self::with_normalize) to opt out.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the vectors differ in length or the dates
    /// are not strictly increasing.
    pub fn new(
        symbol: impl Into<String>,
        dates: Vec<NaiveDate>,
        bars: Vec<Bar>,
    ) -> Result<Self, GraficoError> {
        let symbol = symbol.into();
        if dates.len() != bars.len() {
            return Err(GraficoError::InvalidArg(format!(
                "series for '{symbol}': {} dates but {} bars",
                dates.len(),
                bars.len()
            )));
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(GraficoError::InvalidArg(format!(
                "series for '{symbol}': date index is not strictly increasing"
            )));
        }
        Ok(Self {
            symbol,
            dates,
            bars,
            normalize: true,
        })
    }

    /// Same series with normalization-on-read toggled.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Ticker symbol (or `"A:B"` for ratio series).
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The date index.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The raw bars, untouched by normalization.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Whether reads normalize by default.
    #[must_use]
    pub const fn normalizes(&self) -> bool {
        self.normalize
    }

    /// Number of time points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when the series holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Read a column through the series' own normalization setting.
    #[must_use]
    pub fn values(&self, field: Field) -> Vec<f64> {
        self.values_with(field, self.normalize)
    }

    /// Read a column, explicitly normalized or raw.
    ///
    /// Normalization min-max rescales to [0, 1] and then shifts so the first
    /// value is 0; an all-equal column degenerates to NaN.
    #[must_use]
    pub fn values_with(&self, field: Field, normalize: bool) -> Vec<f64> {
        let raw: Vec<f64> = self.bars.iter().map(|b| b.field(field)).collect();
        if normalize {
            normalize_anchored(&raw)
        } else {
            raw
        }
    }

    /// String-keyed column access.
    ///
    /// # Errors
    /// Returns `UnknownField` when `name` is not an OHLCV column.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, GraficoError> {
        let field: Field = name.parse()?;
        Ok(self.values(field))
    }

    /// Element-wise ratio of this series over `other`, joined by date.
    ///
    /// No alignment is performed: the result keeps this series' date index,
    /// and any date `other` does not carry becomes a NaN row. The ratio is
    /// named `"{self}:{other}"` and reads raw (normalization disabled), since
    /// a ratio is already scale-free.
    #[must_use]
    pub fn ratio(&self, other: &Self) -> Self {
        let bars = self
            .dates
            .iter()
            .zip(&self.bars)
            .map(|(date, bar)| {
                other
                    .bar_at(*date)
                    .map_or(NAN_BAR, |rhs| divide_bars(bar, &rhs))
            })
            .collect();
        Self {
            symbol: format!("{}:{}", self.symbol, other.symbol),
            dates: self.dates.clone(),
            bars,
            normalize: false,
        }
    }

    /// Rows within `[start, end]`, inclusive; `None` leaves that side open.
    ///
    /// Slicing an already-sliced series to the same bounds is a no-op.
    #[must_use]
    pub fn slice_time_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let keep = |d: &NaiveDate| {
            start.is_none_or(|s| *d >= s) && end.is_none_or(|e| *d <= e)
        };
        let (dates, bars) = self
            .dates
            .iter()
            .zip(&self.bars)
            .filter(|(d, _)| keep(d))
            .map(|(d, b)| (*d, *b))
            .unzip();
        Self {
            symbol: self.symbol.clone(),
            dates,
            bars,
            normalize: self.normalize,
        }
    }

    /// Line trace for one column, named after the symbol.
    ///
    /// Values go through the series' own normalization setting, so
    /// comparison sets produce anchored, same-range lines.
    #[must_use]
    pub fn line_trace(&self, field: Field) -> Trace {
        Trace::lines(self.dates.clone(), self.values(field), self.symbol.clone())
    }

    /// Candlestick trace plus its 200-period close moving-average overlay.
    ///
    /// Candles are never normalized (stacked candlesticks do not compare
    /// across symbols anyway). Colors come from the palette: a translucent
    /// complementary pair, with the overlay in the increasing-color family.
    /// Series shorter than 200 rows draw no overlay line at all.
    #[must_use]
    pub fn candlestick_traces(&self, palette: &mut CandlePalette) -> [Trace; 2] {
        let colors = palette.next_pair();
        let candles = Trace::Candlestick {
            x: self.dates.clone(),
            open: self.values_with(Field::Open, false),
            high: self.values_with(Field::High, false),
            low: self.values_with(Field::Low, false),
            close: self.values_with(Field::Close, false),
            name: self.symbol.clone(),
            increasing_line_color: colors.increasing.clone(),
            decreasing_line_color: colors.decreasing,
        };
        let closes = self.values_with(Field::Close, false);
        let overlay = Trace::Scatter {
            mode: "lines".to_string(),
            x: self.dates.clone(),
            y: rolling_mean(&closes, OVERLAY_WINDOW),
            name: self.symbol.clone(),
            fillcolor: Some(colors.increasing),
        };
        [candles, overlay]
    }

    /// Series scaled to an absolute holding of `shares` shares.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `shares` is not a finite, positive number.
    pub fn scaled_by_shares(&self, shares: f64) -> Result<Self, GraficoError> {
        if !shares.is_finite() || shares <= 0.0 {
            return Err(GraficoError::InvalidArg(format!(
                "share count must be finite and positive, got {shares}"
            )));
        }
        let bars = self
            .bars
            .iter()
            .map(|b| Bar {
                open: b.open * shares,
                high: b.high * shares,
                low: b.low * shares,
                close: b.close * shares,
                volume: b.volume,
            })
            .collect();
        Ok(Self {
            symbol: self.symbol.clone(),
            dates: self.dates.clone(),
            bars,
            normalize: false,
        })
    }

    fn bar_at(&self, date: NaiveDate) -> Option<Bar> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|ix| self.bars[ix])
    }
}

const NAN_BAR: Bar = Bar {
    open: f64::NAN,
    high: f64::NAN,
    low: f64::NAN,
    close: f64::NAN,
    volume: f64::NAN,
};

fn divide_bars(lhs: &Bar, rhs: &Bar) -> Bar {
    Bar {
        open: lhs.open / rhs.open,
        high: lhs.high / rhs.high,
        low: lhs.low / rhs.low,
        close: lhs.close / rhs.close,
        volume: lhs.volume / rhs.volume,
    }
}
