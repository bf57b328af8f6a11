//! Sidereal birth charts.
//!
//! [`ChartCalculator`] ties the pipeline together: a [`BirthInput`] is
//! resolved to UTC and an [`Epoch`], a [`PositionProvider`] supplies
//! tropical longitudes, and each one is shifted by the configured ayanamsha
//! and classified into a [`CelestialPosition`].
//!
//! Ascendant and Mercury default to [`PositionSource::Placeholder`], which
//! copies the Sun's position.

pub mod calculator;
pub mod chart;
pub mod config;
pub mod error;
pub mod position;

pub use calculator::ChartCalculator;
pub use chart::{BirthChart, COMPUTED_AT_FORMAT, ChartMetadata, format_computed_at};
pub use config::{ChartConfig, DEFAULT_HOUSE_SYSTEM, PositionSource};
pub use error::ChartError;
pub use position::CelestialPosition;

pub use janma_ephem::{Body, MeeusEphemeris, PositionProvider};
pub use janma_time::{BirthInput, Epoch};

/// Parse raw birth data and compute a chart with the default config.
pub fn calculate_chart(
    date: &str,
    time: &str,
    latitude_deg: f64,
    longitude_deg: f64,
    timezone: &str,
) -> Result<BirthChart, ChartError> {
    let input = BirthInput::parse(date, time, latitude_deg, longitude_deg, timezone)?;
    ChartCalculator::new(input)?.calculate_chart()
}
