pub mod analyzer;
pub mod forecast;
pub mod thresholds;
