//! Fixed constants of the trend analysis.

/// Minimum change between first and last sample before the endpoint
/// classifier reports warming or cooling.
pub const ENDPOINT_DEADBAND: f64 = 0.5;

/// Slope magnitude (°C per sample) below which a series is stable.
pub const SLOPE_STABLE_THRESHOLD: f64 = 0.1;

/// Recommendation bands keyed on the average temperature, checked low to
/// high. The first band whose upper bound exceeds the average wins.
pub const RECOMMENDATION_BANDS: [(f64, &str); 4] = [
    (0.0, "Very cold! Dress warmly with multiple layers."),
    (10.0, "Cold weather. Wear a jacket and warm clothing."),
    (20.0, "Moderate temperature. Light jacket recommended."),
    (30.0, "Warm weather. Light clothing is comfortable."),
];

/// Used when the average is at or above every band.
pub const HOT_RECOMMENDATION: &str = "Hot weather. Stay hydrated and wear light clothes.";
