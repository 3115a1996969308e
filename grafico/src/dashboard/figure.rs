use grafico_core::Trace;
use serde::{Deserialize, Serialize};

/// Pixel layout hints for the charting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureLayout {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
}

/// A renderable figure: trace list plus layout hints, in the shape the
/// charting surface consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Traces to draw, in z-order.
    pub data: Vec<Trace>,
    /// Pixel layout hints.
    pub layout: FigureLayout,
}

impl Figure {
    /// Bundle traces with a layout.
    #[must_use]
    pub const fn new(data: Vec<Trace>, width: u32, height: u32) -> Self {
        Self {
            data,
            layout: FigureLayout { width, height },
        }
    }
}
