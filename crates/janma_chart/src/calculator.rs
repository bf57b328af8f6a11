//! The chart pipeline: birth input → UTC → epoch → positions → chart.

use chrono::{DateTime, Utc};
use janma_ephem::{Body, MeeusEphemeris, PositionProvider};
use janma_time::{BirthInput, Epoch};
use log::debug;

use crate::chart::{BirthChart, ChartMetadata};
use crate::config::{ChartConfig, PositionSource};
use crate::error::ChartError;
use crate::position::CelestialPosition;

/// Computes one birth chart.
///
/// The UTC instant and epoch are resolved once at construction; each call
/// to [`calculate_chart`](Self::calculate_chart) queries the provider again.
#[derive(Debug)]
pub struct ChartCalculator<P = MeeusEphemeris> {
    input: BirthInput,
    utc: DateTime<Utc>,
    epoch: Epoch,
    config: ChartConfig,
    provider: P,
}

impl ChartCalculator<MeeusEphemeris> {
    /// Default config with the bundled analytic ephemeris.
    pub fn new(input: BirthInput) -> Result<Self, ChartError> {
        Self::with_provider(input, ChartConfig::default(), MeeusEphemeris)
    }
}

impl<P: PositionProvider> ChartCalculator<P> {
    pub fn with_provider(
        input: BirthInput,
        config: ChartConfig,
        provider: P,
    ) -> Result<Self, ChartError> {
        config.validate()?;
        let utc = input.to_utc();
        let epoch = Epoch::from_utc(&utc);
        debug!(
            "birth {} {} {} -> {} (epoch {epoch}, JD {:.6})",
            input.date(),
            input.time(),
            input.timezone().name(),
            utc.format("%Y-%m-%dT%H:%M:%SZ"),
            epoch.julian_day()
        );
        Ok(Self {
            input,
            utc,
            epoch,
            config,
            provider,
        })
    }

    pub fn input(&self) -> &BirthInput {
        &self.input
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Tropical geocentric longitude of `body` at the birth epoch.
    pub fn tropical_longitude(&self, body: Body) -> Result<f64, ChartError> {
        Ok(self.provider.geocentric_longitude(body, &self.epoch)?)
    }

    /// Classified sidereal position of `body`.
    pub fn position(&self, body: Body) -> Result<CelestialPosition, ChartError> {
        let tropical = self.tropical_longitude(body)?;
        Ok(self.place(tropical))
    }

    /// Chart stamped with the current time.
    pub fn calculate_chart(&self) -> Result<BirthChart, ChartError> {
        self.calculate_chart_at(Utc::now())
    }

    /// Chart stamped with `computed_at`.
    pub fn calculate_chart_at(&self, computed_at: DateTime<Utc>) -> Result<BirthChart, ChartError> {
        let sun = self.position(Body::Sun)?;
        let moon = self.position(Body::Moon)?;

        let ascendant = match self.config.ascendant_source {
            PositionSource::Placeholder => None,
            PositionSource::Computed => {
                let tropical = self.provider.ascendant_longitude(
                    &self.epoch,
                    self.input.latitude_deg(),
                    self.input.longitude_deg(),
                )?;
                Some(self.place(tropical))
            }
        };
        let mercury = match self.config.mercury_source {
            PositionSource::Placeholder => None,
            PositionSource::Computed => Some(self.position(Body::Mercury)?),
        };

        let metadata = ChartMetadata::new(&self.config, self.provider.source_tag(), computed_at);
        debug!(
            "chart: sun {} ({}) {:.2}, moon {} ({}) {:.2}",
            sun.sign.western_name(),
            sun.sign.name(),
            sun.sidereal_degree,
            moon.sign.western_name(),
            moon.sign.name(),
            moon.sidereal_degree
        );
        Ok(BirthChart::assemble(sun, moon, ascendant, mercury, metadata))
    }

    fn place(&self, tropical_lon_deg: f64) -> CelestialPosition {
        CelestialPosition::from_tropical(tropical_lon_deg, &self.config.ayanamsha)
    }
}
