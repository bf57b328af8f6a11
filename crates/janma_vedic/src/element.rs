//! Element (tattva) and modality of the zodiac signs.
//!
//! Both are static membership lookups. Fire, earth and air signs and the
//! cardinal and fixed signs are listed explicitly; water and mutable are
//! whatever remains.

use serde::{Serialize, Serializer};

use crate::rashi::Rashi;

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The three sign modalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

pub const FIRE_SIGNS: [Rashi; 3] = [Rashi::Mesha, Rashi::Simha, Rashi::Dhanu];
pub const EARTH_SIGNS: [Rashi; 3] = [Rashi::Vrishabha, Rashi::Kanya, Rashi::Makara];
pub const AIR_SIGNS: [Rashi; 3] = [Rashi::Mithuna, Rashi::Tula, Rashi::Kumbha];

pub const CARDINAL_SIGNS: [Rashi; 4] = [Rashi::Mesha, Rashi::Karka, Rashi::Tula, Rashi::Makara];
pub const FIXED_SIGNS: [Rashi; 4] = [
    Rashi::Vrishabha,
    Rashi::Simha,
    Rashi::Vrischika,
    Rashi::Kumbha,
];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for Modality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Element of a rashi.
pub fn element_of(rashi: Rashi) -> Element {
    if FIRE_SIGNS.contains(&rashi) {
        Element::Fire
    } else if EARTH_SIGNS.contains(&rashi) {
        Element::Earth
    } else if AIR_SIGNS.contains(&rashi) {
        Element::Air
    } else {
        Element::Water
    }
}

/// Modality of a rashi.
pub fn modality_of(rashi: Rashi) -> Modality {
    if CARDINAL_SIGNS.contains(&rashi) {
        Modality::Cardinal
    } else if FIXED_SIGNS.contains(&rashi) {
        Modality::Fixed
    } else {
        Modality::Mutable
    }
}

/// Element by western sign name. Unknown names fall through to Water.
pub fn element_of_sign_name(name: &str) -> Element {
    Rashi::from_western_name(name).map_or(Element::Water, element_of)
}

/// Modality by western sign name. Unknown names fall through to Mutable.
pub fn modality_of_sign_name(name: &str) -> Modality {
    Rashi::from_western_name(name).map_or(Modality::Mutable, modality_of)
}
