//! Chart configuration used at calculator construction time.

use janma_vedic::Ayanamsha;

/// House system tag reported in chart metadata.
pub const DEFAULT_HOUSE_SYSTEM: &str = "placidus";

/// Where a chart slot gets its longitude from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PositionSource {
    /// Copy the Sun's position verbatim.
    #[default]
    Placeholder,
    /// Ask the position provider.
    Computed,
}

/// Chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub ayanamsha: Ayanamsha,
    pub house_system: String,
    /// Replaces the provider's own tag in metadata when set.
    pub ephemeris_source: Option<String>,
    pub ascendant_source: PositionSource,
    pub mercury_source: PositionSource,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsha: Ayanamsha::default(),
            house_system: DEFAULT_HOUSE_SYSTEM.to_string(),
            ephemeris_source: None,
            ascendant_source: PositionSource::Placeholder,
            mercury_source: PositionSource::Placeholder,
        }
    }
}

impl ChartConfig {
    /// Default config with both placeholder slots switched to `Computed`.
    pub fn computed() -> Self {
        Self {
            ascendant_source: PositionSource::Computed,
            mercury_source: PositionSource::Computed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), crate::ChartError> {
        use crate::ChartError::InvalidConfig;

        let value = self.ayanamsha.value_deg();
        if !value.is_finite() || !(0.0..360.0).contains(&value) {
            return Err(InvalidConfig("ayanamsha value must be in [0, 360)"));
        }
        if self.ayanamsha.name().trim().is_empty() {
            return Err(InvalidConfig("ayanamsha name must not be empty"));
        }
        if self.house_system.trim().is_empty() {
            return Err(InvalidConfig("house_system must not be empty"));
        }
        if self
            .ephemeris_source
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            return Err(InvalidConfig("ephemeris_source must not be empty when set"));
        }
        Ok(())
    }
}
