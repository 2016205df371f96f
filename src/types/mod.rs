pub mod forecast;
pub mod sample;
pub mod trend;
