//! Lunar longitude (Meeus, Astronomical Algorithms, ch. 47).
//!
//! Uses the full 60-term longitude series of table 47.A plus the three
//! additive terms for Venus, Jupiter and the flattening of the Earth.
//! Accuracy is about 10 arcsec. Nutation is not applied, so the result is
//! referred to the mean equinox of date.

use crate::normalize_360;

/// One row of the periodic series: multiples of D, M, M', F and the sine
/// coefficient in units of 1e-6 deg.
struct LonTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: i32,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: i32) -> LonTerm {
    LonTerm { d, m, mp, f, coeff }
}

#[rustfmt::skip]
const LONGITUDE_TERMS: [LonTerm; 60] = [
    term(0, 0, 1, 0, 6_288_774),
    term(2, 0, -1, 0, 1_274_027),
    term(2, 0, 0, 0, 658_314),
    term(0, 0, 2, 0, 213_618),
    term(0, 1, 0, 0, -185_116),
    term(0, 0, 0, 2, -114_332),
    term(2, 0, -2, 0, 58_793),
    term(2, -1, -1, 0, 57_066),
    term(2, 0, 1, 0, 53_322),
    term(2, -1, 0, 0, 45_758),
    term(0, 1, -1, 0, -40_923),
    term(1, 0, 0, 0, -34_720),
    term(0, 1, 1, 0, -30_383),
    term(2, 0, 0, -2, 15_327),
    term(0, 0, 1, 2, -12_528),
    term(0, 0, 1, -2, 10_980),
    term(4, 0, -1, 0, 10_675),
    term(0, 0, 3, 0, 10_034),
    term(4, 0, -2, 0, 8_548),
    term(2, 1, -1, 0, -7_888),
    term(2, 1, 0, 0, -6_766),
    term(1, 0, -1, 0, -5_163),
    term(1, 1, 0, 0, 4_987),
    term(2, -1, 1, 0, 4_036),
    term(2, 0, 2, 0, 3_994),
    term(4, 0, 0, 0, 3_861),
    term(2, 0, -3, 0, 3_665),
    term(0, 1, -2, 0, -2_689),
    term(2, 0, -1, 2, -2_602),
    term(2, -1, -2, 0, 2_390),
    term(1, 0, 1, 0, -2_348),
    term(2, -2, 0, 0, 2_236),
    term(0, 1, 2, 0, -2_120),
    term(0, 2, 0, 0, -2_069),
    term(2, -2, -1, 0, 2_048),
    term(2, 0, 1, -2, -1_773),
    term(2, 0, 0, 2, -1_595),
    term(4, -1, -1, 0, 1_215),
    term(0, 0, 2, 2, -1_110),
    term(3, 0, -1, 0, -892),
    term(2, 1, 1, 0, -810),
    term(4, -1, -2, 0, 759),
    term(0, 2, -1, 0, -713),
    term(2, 2, -1, 0, -700),
    term(2, 1, -2, 0, 691),
    term(2, -1, 0, -2, 596),
    term(4, 0, 1, 0, 549),
    term(0, 0, 4, 0, 537),
    term(4, -1, 0, 0, 520),
    term(1, 0, -2, 0, -487),
    term(2, 1, 0, -2, -399),
    term(0, 0, 2, -2, -381),
    term(1, 1, 1, 0, 351),
    term(3, 0, -2, 0, -340),
    term(4, 0, -3, 0, 330),
    term(2, -1, 2, 0, 327),
    term(0, 2, 1, 0, -323),
    term(1, 1, -1, 0, 299),
    term(2, 0, 3, 0, 294),
    term(2, 0, -1, -2, 0),
];

/// Fundamental arguments of the lunar theory, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LunarArguments {
    /// Mean longitude of the Moon (L').
    mean_longitude: f64,
    /// Mean elongation (D).
    elongation: f64,
    /// Sun's mean anomaly (M).
    sun_anomaly: f64,
    /// Moon's mean anomaly (M').
    moon_anomaly: f64,
    /// Argument of latitude (F).
    latitude_arg: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_arg: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Sum of the periodic terms (Σl), in units of 1e-6 deg.
fn longitude_series(args: &LunarArguments, t: f64) -> f64 {
    // Eccentricity of Earth's orbit, scales terms that involve M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_arg.to_radians();

    let mut sum = 0.0;
    for row in &LONGITUDE_TERMS {
        let arg = row.d as f64 * d + row.m as f64 * m + row.mp as f64 * mp + row.f as f64 * f;
        let scale = match row.m.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += row.coeff as f64 * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let l_minus_f = (args.mean_longitude - args.latitude_arg).to_radians();
    sum + 3958.0 * a1.sin() + 1962.0 * l_minus_f.sin() + 318.0 * a2.sin()
}

/// Geocentric ecliptic longitude of the Moon in degrees, [0, 360).
///
/// `t` is Julian centuries of dynamical time since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    normalize_360(args.mean_longitude + longitude_series(&args, t) / 1_000_000.0)
}
