//! Property and golden tests for sidereal classification.
//!
//! Pure-math tests (no ephemeris needed).

use janma_vedic::{
    ALL_NAKSHATRAS_27, ALL_RASHIS, Element, Graha, LAHIRI_FIXED_DEG, Modality, Nakshatra, Rashi,
    classify, element_of, modality_of, nakshatra_from_longitude, rashi_from_longitude,
    round_to_hundredths, tropical_to_sidereal,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_sweep_all_12() {
    let expected = [
        "Aries",
        "Taurus",
        "Gemini",
        "Cancer",
        "Leo",
        "Virgo",
        "Libra",
        "Scorpio",
        "Sagittarius",
        "Capricorn",
        "Aquarius",
        "Pisces",
    ];
    for (i, name) in expected.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi.western_name(), *name, "rashi at {lon} deg");
        assert_eq!(info.rashi_index, i as u8);
    }
}

proptest! {
    #[test]
    fn rashi_is_floor_of_thirty(lon in 0.0f64..360.0) {
        let info = rashi_from_longitude(lon);
        prop_assert_eq!(info.rashi_index as f64, (lon / 30.0).floor());
        prop_assert!((0.0..30.0).contains(&info.degrees_in_rashi));
    }

    #[test]
    fn rashi_monotonic(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rashi_from_longitude(lo).rashi_index <= rashi_from_longitude(hi).rashi_index);
    }
}

// ---------------------------------------------------------------------------
// Nakshatra
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_sweep_all_27() {
    let span = 360.0 / 27.0;
    for i in 0..27u8 {
        let lon = i as f64 * span + span / 2.0;
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra_index, i, "nakshatra at {lon} deg");
        assert_eq!(info.nakshatra, ALL_NAKSHATRAS_27[i as usize]);
    }
}

#[test]
fn nakshatra_ruler_table() {
    let expected = [
        (Nakshatra::Ashwini, "Ketu"),
        (Nakshatra::Bharani, "Venus"),
        (Nakshatra::Krittika, "Sun"),
        (Nakshatra::Rohini, "Moon"),
        (Nakshatra::Mrigashira, "Mars"),
        (Nakshatra::Ardra, "Rahu"),
        (Nakshatra::Punarvasu, "Jupiter"),
        (Nakshatra::Pushya, "Saturn"),
        (Nakshatra::Ashlesha, "Mercury"),
        (Nakshatra::Magha, "Ketu"),
        (Nakshatra::Revati, "Mercury"),
    ];
    for (nak, ruler) in expected {
        assert_eq!(nak.ruler().english_name(), ruler, "{}", nak.name());
    }
}

proptest! {
    #[test]
    fn nakshatra_ruler_cycles_every_nine(lon in 0.0f64..360.0) {
        let info = nakshatra_from_longitude(lon);
        let span = 360.0 / 27.0;
        let next = nakshatra_from_longitude((lon + 9.0 * span) % 360.0);
        prop_assert_eq!(info.ruler, next.ruler);
        prop_assert!((1..=4).contains(&info.pada));
    }
}

// ---------------------------------------------------------------------------
// Sidereal conversion
// ---------------------------------------------------------------------------

#[test]
fn sidereal_without_wrap() {
    assert!((tropical_to_sidereal(359.9) - 335.75).abs() < 1e-9);
}

#[test]
fn sidereal_with_wrap() {
    assert!((tropical_to_sidereal(10.0) - 345.85).abs() < 1e-9);
}

proptest! {
    #[test]
    fn sidereal_matches_modular_identity(tropical in 0.0f64..360.0) {
        let s = tropical_to_sidereal(tropical);
        prop_assert!((0.0..360.0).contains(&s), "sidereal = {}", s);
        let expected = (tropical - LAHIRI_FIXED_DEG).rem_euclid(360.0);
        prop_assert!((s - expected).abs() < 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Element / modality
// ---------------------------------------------------------------------------

#[test]
fn each_sign_has_one_element_and_modality() {
    let mut element_counts = [0usize; 4];
    let mut modality_counts = [0usize; 3];
    for r in ALL_RASHIS {
        element_counts[element_of(r) as usize] += 1;
        modality_counts[modality_of(r) as usize] += 1;
    }
    assert_eq!(element_counts, [3, 3, 3, 3]);
    assert_eq!(modality_counts, [4, 4, 4]);
}

#[test]
fn classify_known_points() {
    let scorpio = classify(215.0);
    assert_eq!(scorpio.rashi.rashi, Rashi::Vrischika);
    assert_eq!(scorpio.element, Element::Water);
    assert_eq!(scorpio.modality, Modality::Fixed);
    assert_eq!(scorpio.nakshatra.nakshatra, Nakshatra::Anuradha);
    assert_eq!(scorpio.nakshatra.ruler, Graha::Shani);
}

// ---------------------------------------------------------------------------
// Degree display
// ---------------------------------------------------------------------------

#[test]
fn degree_rounding_pinned() {
    assert_eq!(round_to_hundredths(0.125), 0.12);
    assert_eq!(round_to_hundredths(0.375), 0.38);
    let p = classify(tropical_to_sidereal(10.0));
    assert_eq!(round_to_hundredths(p.rashi.degrees_in_rashi), 15.85);
}
