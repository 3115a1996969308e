/// Min-max normalization with first-value anchoring.
pub mod normalize;
/// Trailing-window rolling statistics.
pub mod rolling;

pub use normalize::normalize_anchored;
pub use rolling::rolling_mean;
