/// Figure and layout-hint structures.
pub mod figure;
/// Declarative dashboard layout tree.
pub mod layout;

use chrono::NaiveDate;
use grafico_core::{CandlePalette, Field, GraficoError, MetadataTable, SymbolSet};

pub use figure::{Figure, FigureLayout};
pub use layout::{Control, DashboardLayout, Panel};

/// Candlestick figure size in pixels.
const CANDLESTICK_SIZE: (u32, u32) = (1500, 800);
/// Line figure size in pixels.
const LINE_SIZE: (u32, u32) = (1000, 700);

/// The loaded dashboard: an aligned symbol set, optional metadata, and the
/// reactive handlers the UI host calls.
///
/// Handlers run one at a time on the host's event loop and are plain
/// synchronous methods over the immutable set; each call subsets and
/// regenerates traces from scratch.
#[derive(Debug)]
pub struct Dashboard {
    set: SymbolSet,
    metadata: Option<MetadataTable>,
    chart_seed: Option<u64>,
}

impl Dashboard {
    pub(crate) const fn new(
        set: SymbolSet,
        metadata: Option<MetadataTable>,
        chart_seed: Option<u64>,
    ) -> Self {
        Self {
            set,
            metadata,
            chart_seed,
        }
    }

    /// The full aligned symbol set.
    #[must_use]
    pub const fn set(&self) -> &SymbolSet {
        &self.set
    }

    /// Company metadata, when the context was configured to fetch it.
    #[must_use]
    pub const fn metadata(&self) -> Option<&MetadataTable> {
        self.metadata.as_ref()
    }

    /// Declarative layout for the UI host: a candlestick panel and a
    /// normalized-comparison line panel.
    #[must_use]
    pub fn layout(&self) -> DashboardLayout {
        let options: Vec<String> = self.set.symbols().map(str::to_string).collect();
        let index = self.set.date_index();
        let mut line_controls = vec![Control::SymbolDropdown {
            id: "multiline-select-sym".into(),
            options: options.clone(),
            multi: true,
        }];
        if let (Some(first), Some(last)) = (index.first(), index.last()) {
            line_controls.push(Control::DateRangePicker {
                id: "date-select".into(),
                min_date: *first,
                max_date: *last,
                display_format: "DD.MM.YYYY".into(),
            });
        }
        line_controls.push(Control::Graph {
            id: "multi-line".into(),
        });

        DashboardLayout {
            panels: vec![
                Panel {
                    id: "multicand".into(),
                    title: "Candleplots for multiple tickers".into(),
                    notes: vec![
                        "Choose tickers from the dropdown menu".into(),
                        "Choose a specific range for visualization by dragging on the graph"
                            .into(),
                        "The line is the 200 day rolling mean (only visible for days>200)".into(),
                    ],
                    controls: vec![
                        Control::SymbolDropdown {
                            id: "multicand-select-sym".into(),
                            options,
                            multi: true,
                        },
                        Control::Graph {
                            id: "multi-cand".into(),
                        },
                    ],
                },
                Panel {
                    id: "multiline".into(),
                    title: "Comparable line plots for multiple tickers".into(),
                    notes: vec![
                        "Choose tickers and date range to display".into(),
                        "All lines are normalized to have same range".into(),
                        "All lines are also scaled to begin at 0".into(),
                    ],
                    controls: line_controls,
                },
            ],
        }
    }

    /// Handler for the candlestick panel: candlestick pairs for the
    /// selected symbols. An empty selection renders an empty figure.
    ///
    /// # Errors
    /// Returns `NotFound` when a selected symbol is not in the set.
    pub fn candlestick_figure<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Figure, GraficoError> {
        tracing::debug!(selected = symbols.len(), "rendering candlestick figure");
        let subset = self.set.subset_by_symbols(symbols)?;
        let mut palette = self.palette();
        let (width, height) = CANDLESTICK_SIZE;
        Ok(Figure::new(
            subset.candlestick_traces(&mut palette),
            width,
            height,
        ))
    }

    /// Handler for the line panel: normalized close lines for the selected
    /// symbols over the picked date range. Omitted bounds default to the
    /// set's own date bounds; an empty selection renders an empty figure.
    ///
    /// # Errors
    /// Returns `NotFound` when a selected symbol is not in the set.
    pub fn line_figure<S: AsRef<str>>(
        &self,
        symbols: &[S],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Figure, GraficoError> {
        tracing::debug!(selected = symbols.len(), ?start, ?end, "rendering line figure");
        let subset = self
            .set
            .subset_by_symbols(symbols)?
            .subset_by_time_range(start, end);
        let (width, height) = LINE_SIZE;
        Ok(Figure::new(subset.line_traces(Field::Close), width, height))
    }

    fn palette(&self) -> CandlePalette {
        self.chart_seed
            .map_or_else(CandlePalette::from_entropy, CandlePalette::seeded)
    }
}
