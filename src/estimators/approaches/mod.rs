pub mod binned;
pub mod rescaled_range;

// Unified re-exports for common estimators so tests and users can import
// riskmeasure::estimators::approaches::* ergonomically.
pub use binned::BinnedMutualInformation;
pub use binned::shannon::BinnedEntropy;
pub use rescaled_range::RescaledRangeHurst;
