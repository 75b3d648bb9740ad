use foundation::color::Color;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::variables::normalize;

/// Fallback for null / non-numeric values in a numeric family.
pub const NEUTRAL: Color = Color::from_rgb24(0xcccccc);

/// Classification rule for one canonical variable family.
///
/// Families sharing a palette point at the same band table, so adding a
/// variable is a registry entry, not new branch logic.
#[derive(Debug, Copy, Clone)]
pub enum ColorRule {
    /// Ordered ascending `(upper bound, color)` bands plus the top-end
    /// color. First band with `value < bound` wins, so a value exactly
    /// on a bound falls into the next higher band.
    Threshold {
        bands: &'static [(f64, Color)],
        top: Color,
    },
    /// Exact integer-keyed lookup for categorical variables.
    Discrete {
        entries: &'static [(i64, Color)],
        unknown: Color,
    },
}

const TEMPERATURE_BANDS: &[(f64, Color)] = &[
    (0.0, Color::from_rgb24(0x313695)),
    (5.0, Color::from_rgb24(0x4575b4)),
    (10.0, Color::from_rgb24(0x74add1)),
    (15.0, Color::from_rgb24(0xabd9e9)),
    (20.0, Color::from_rgb24(0xe0f3f8)),
    (25.0, Color::from_rgb24(0xfee090)),
    (28.0, Color::from_rgb24(0xfdae61)),
    (32.0, Color::from_rgb24(0xf46d43)),
];
const TEMPERATURE_TOP: Color = Color::from_rgb24(0xa50026);

const REFLECTANCE_BANDS: &[(f64, Color)] = &[
    (0.1, Color::from_rgb24(0x0000ff)),
    (0.2, Color::from_rgb24(0x00bfff)),
    (0.3, Color::from_rgb24(0x00ff00)),
    (0.4, Color::from_rgb24(0xffff00)),
    (0.5, Color::from_rgb24(0xff8000)),
];
const REFLECTANCE_TOP: Color = Color::from_rgb24(0xff0000);

const CONCENTRATION_BANDS: &[(f64, Color)] = &[
    (0.1, Color::from_rgb24(0xffffcc)),
    (0.3, Color::from_rgb24(0xffeda0)),
    (0.5, Color::from_rgb24(0xfeb24c)),
    (0.7, Color::from_rgb24(0xf03b20)),
];
const CONCENTRATION_TOP: Color = Color::from_rgb24(0xbd0026);

const BLOOM_BANDS: &[(f64, Color)] = &[
    (0.2, Color::from_rgb24(0xd0f0c0)),
    (0.4, Color::from_rgb24(0xa2d39c)),
    (0.6, Color::from_rgb24(0x62c370)),
    (0.8, Color::from_rgb24(0x2e8540)),
];
const BLOOM_TOP: Color = Color::from_rgb24(0x005a32);

const ATMOSPHERIC_BANDS: &[(f64, Color)] = &[
    (0.2, Color::from_rgb24(0xe0f3db)),
    (0.4, Color::from_rgb24(0xa8ddb5)),
    (0.6, Color::from_rgb24(0x7bccc4)),
    (0.8, Color::from_rgb24(0x43a2ca)),
];
const ATMOSPHERIC_TOP: Color = Color::from_rgb24(0x0868ac);

const CLOUD_MASK_BANDS: &[(f64, Color)] = &[
    (0.5, Color::from_rgb24(0x0000ff)),
    (1.5, Color::from_rgb24(0x00bfff)),
    (2.5, Color::from_rgb24(0xffa500)),
];
const CLOUD_MASK_TOP: Color = Color::from_rgb24(0x8b0000);

const LANDCOVER_ENTRIES: &[(i64, Color)] = &[
    (0, Color::from_rgb24(0xffffff)),
    (1, Color::from_rgb24(0x7fc97f)),
    (2, Color::from_rgb24(0xbeaed4)),
    (3, Color::from_rgb24(0xfdc086)),
    (4, Color::from_rgb24(0xffff99)),
    (5, Color::from_rgb24(0x386cb0)),
    (6, Color::from_rgb24(0xf0027f)),
];
const LANDCOVER_UNKNOWN: Color = Color::from_rgb24(0x999999);

static RULES: Lazy<HashMap<&'static str, ColorRule>> = Lazy::new(|| {
    let threshold = |bands, top| ColorRule::Threshold { bands, top };
    let mut map = HashMap::new();
    map.insert("sst", threshold(TEMPERATURE_BANDS, TEMPERATURE_TOP));
    map.insert("lstf", threshold(TEMPERATURE_BANDS, TEMPERATURE_TOP));
    map.insert("cmi", threshold(REFLECTANCE_BANDS, REFLECTANCE_TOP));
    map.insert("dust", threshold(CONCENTRATION_BANDS, CONCENTRATION_TOP));
    map.insert("adp", threshold(CONCENTRATION_BANDS, CONCENTRATION_TOP));
    map.insert("algaebloom", threshold(BLOOM_BANDS, BLOOM_TOP));
    map.insert("acha", threshold(ATMOSPHERIC_BANDS, ATMOSPHERIC_TOP));
    map.insert("dsi", threshold(ATMOSPHERIC_BANDS, ATMOSPHERIC_TOP));
    map.insert("rrqpef", threshold(ATMOSPHERIC_BANDS, ATMOSPHERIC_TOP));
    map.insert("tpwf", threshold(ATMOSPHERIC_BANDS, ATMOSPHERIC_TOP));
    map.insert("acm", threshold(CLOUD_MASK_BANDS, CLOUD_MASK_TOP));
    map.insert(
        "landcover",
        ColorRule::Discrete {
            entries: LANDCOVER_ENTRIES,
            unknown: LANDCOVER_UNKNOWN,
        },
    );
    map
});

/// Display color for one value of a (possibly raw) variable name.
///
/// Total: every finite value, NaN and `None` resolve to a color, and
/// variables without a registry entry fall through to the gradient.
pub fn color_for(variable: &str, value: Option<f64>) -> Color {
    let Some(value) = value else {
        return NEUTRAL;
    };
    if value.is_nan() {
        return NEUTRAL;
    }

    let canonical = normalize(variable);
    match RULES.get(canonical.as_str()) {
        Some(ColorRule::Threshold { bands, top }) => {
            for (bound, color) in *bands {
                if value < *bound {
                    return *color;
                }
            }
            *top
        }
        Some(ColorRule::Discrete { entries, unknown }) => {
            if value.fract() == 0.0 {
                let key = value as i64;
                for (entry, color) in *entries {
                    if *entry == key {
                        return *color;
                    }
                }
            }
            *unknown
        }
        None => gradient(value),
    }
}

/// Unrecognized variables: clamp to 0..50 and sweep blue to red.
fn gradient(value: f64) -> Color {
    let t = value.clamp(0.0, 50.0) / 50.0;
    Color::new(0, 0, 255).lerp(Color::new(255, 0, 0), t)
}

#[cfg(test)]
mod tests {
    use super::{NEUTRAL, color_for};
    use foundation::color::Color;

    #[test]
    fn null_and_nan_use_the_neutral_fallback() {
        assert_eq!(color_for("sst", None), NEUTRAL);
        assert_eq!(color_for("sst", Some(f64::NAN)), NEUTRAL);
        assert_eq!(color_for("whatever", None), NEUTRAL);
    }

    #[test]
    fn sea_temperature_bands() {
        assert_eq!(color_for("sst", Some(-5.0)), Color::from_rgb24(0x313695));
        assert_eq!(color_for("sst", Some(29.0)), Color::from_rgb24(0xf46d43));
        assert_eq!(color_for("sst", Some(40.0)), Color::from_rgb24(0xa50026));
        // lstf shares the temperature palette.
        assert_eq!(color_for("lstf", Some(-5.0)), color_for("sst", Some(-5.0)));
    }

    #[test]
    fn boundary_values_fall_into_the_higher_band() {
        // 25 is the bound between [20,25) and [25,28).
        assert_eq!(color_for("sst", Some(25.0)), Color::from_rgb24(0xfee090));
        assert_eq!(color_for("sst", Some(24.999)), Color::from_rgb24(0xe0f3f8));
        // The last bound tips into the top color.
        assert_eq!(color_for("sst", Some(32.0)), Color::from_rgb24(0xa50026));
        assert_eq!(color_for("dust", Some(0.7)), Color::from_rgb24(0xbd0026));
    }

    #[test]
    fn variable_names_are_normalized_before_dispatch() {
        assert_eq!(
            color_for("Sea Surface Temperature", Some(12.0)),
            color_for("sst", Some(12.0)),
        );
        assert_eq!(
            color_for(" DUCMASS ", Some(0.4)),
            color_for("dust", Some(0.4)),
        );
    }

    #[test]
    fn shared_family_tables_agree() {
        for v in [0.1, 0.35, 0.79, 1.2] {
            assert_eq!(color_for("acha", Some(v)), color_for("dsi", Some(v)));
            assert_eq!(color_for("rrqpef", Some(v)), color_for("tpwf", Some(v)));
            assert_eq!(color_for("dust", Some(v)), color_for("adp", Some(v)));
        }
    }

    #[test]
    fn landcover_is_a_discrete_lookup() {
        assert_eq!(color_for("landcover", Some(3.0)), Color::from_rgb24(0xfdc086));
        assert_eq!(color_for("landcover", Some(99.0)), Color::from_rgb24(0x999999));
        // Non-integer codes have no category.
        assert_eq!(color_for("landcover", Some(3.5)), Color::from_rgb24(0x999999));
    }

    #[test]
    fn cloud_mask_classes() {
        assert_eq!(color_for("acm", Some(0.0)), Color::from_rgb24(0x0000ff));
        assert_eq!(color_for("acm", Some(1.0)), Color::from_rgb24(0x00bfff));
        assert_eq!(color_for("acm", Some(2.0)), Color::from_rgb24(0xffa500));
        assert_eq!(color_for("acm", Some(3.0)), Color::from_rgb24(0x8b0000));
    }

    #[test]
    fn unrecognized_variables_sweep_the_gradient() {
        assert_eq!(color_for("totally_unknown_var", Some(100.0)), Color::new(255, 0, 0));
        assert_eq!(color_for("totally_unknown_var", Some(-3.0)), Color::new(0, 0, 255));
        assert_eq!(color_for("totally_unknown_var", Some(25.0)), Color::new(128, 0, 128));
        // Canonical ids without a palette take the gradient too.
        assert_eq!(color_for("cloud phase", Some(50.0)), Color::new(255, 0, 0));
    }
}
