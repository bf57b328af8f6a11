//! Birth chart document and its metadata block.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::config::ChartConfig;
use crate::position::CelestialPosition;

/// `computedAt` layout: ISO-8601, microseconds, literal `Z`.
pub const COMPUTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Provenance attached to every chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub ephemeris_source: String,
    pub ayanamsha: String,
    pub ayanamsha_value: f64,
    pub house_system: String,
    #[serde(serialize_with = "serialize_computed_at")]
    pub computed_at: DateTime<Utc>,
}

impl ChartMetadata {
    /// Metadata for a chart computed at `computed_at`.
    ///
    /// `provider_tag` is used unless the config overrides the source.
    pub fn new(config: &ChartConfig, provider_tag: &str, computed_at: DateTime<Utc>) -> Self {
        Self {
            ephemeris_source: config
                .ephemeris_source
                .clone()
                .unwrap_or_else(|| provider_tag.to_string()),
            ayanamsha: config.ayanamsha.name().to_string(),
            ayanamsha_value: config.ayanamsha.value_deg(),
            house_system: config.house_system.clone(),
            computed_at,
        }
    }

    pub fn computed_at_string(&self) -> String {
        format_computed_at(&self.computed_at)
    }
}

pub fn format_computed_at(at: &DateTime<Utc>) -> String {
    at.format(COMPUTED_AT_FORMAT).to_string()
}

fn serialize_computed_at<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&at.format(COMPUTED_AT_FORMAT))
}

/// A complete sidereal birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    #[serde(rename = "sunSign")]
    pub sun: CelestialPosition,
    #[serde(rename = "moonSign")]
    pub moon: CelestialPosition,
    pub ascendant: CelestialPosition,
    #[serde(rename = "mercurySign")]
    pub mercury: CelestialPosition,
    #[serde(rename = "_metadata")]
    pub metadata: ChartMetadata,
}

impl BirthChart {
    /// Compose a chart. A `None` ascendant or mercury takes the Sun's position.
    pub fn assemble(
        sun: CelestialPosition,
        moon: CelestialPosition,
        ascendant: Option<CelestialPosition>,
        mercury: Option<CelestialPosition>,
        metadata: ChartMetadata,
    ) -> Self {
        Self {
            sun,
            moon,
            ascendant: ascendant.unwrap_or(sun),
            mercury: mercury.unwrap_or(sun),
            metadata,
        }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
