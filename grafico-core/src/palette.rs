use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Translucent color pair for one candlestick trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleColors {
    /// Line color for increasing days, `rgba(...)` CSS string.
    pub increasing: String,
    /// Line color for decreasing days, `rgba(...)` CSS string.
    pub decreasing: String,
}

/// Source of per-render candlestick colors.
///
/// Each pair is a random base color and its channel-shifted complement,
/// both at 0.2 alpha so overlapping candles stay readable. The generator is
/// seedable so chart appearance can be pinned down in tests; production
/// callers usually draw from OS entropy and get fresh colors per render.
#[derive(Debug, Clone)]
pub struct CandlePalette {
    rng: StdRng,
}

impl CandlePalette {
    /// Palette seeded from OS entropy; colors differ per render call.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic palette for reproducible figures.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next color pair.
    pub fn next_pair(&mut self) -> CandleColors {
        let (r, g, b): (u16, u16, u16) = (
            self.rng.random_range(0..256),
            self.rng.random_range(0..256),
            self.rng.random_range(0..256),
        );
        // Complement by shifting each channel a third of the way around.
        let (r2, g2, b2) = ((r + 120) % 256, (g + 120) % 256, (b + 120) % 256);
        CandleColors {
            increasing: rgba(r2, g2, b2),
            decreasing: rgba(r, g, b),
        }
    }
}

impl Default for CandlePalette {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn rgba(r: u16, g: u16, b: u16) -> String {
    format!("rgba({r}, {g}, {b}, 0.2)")
}
