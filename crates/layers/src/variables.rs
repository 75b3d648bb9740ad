use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical variable id -> accepted raw-name aliases, all stored
/// pre-lowercased. Alias sets must stay disjoint across canonical ids;
/// `alias_lookup` and the tests enforce this.
pub const ALIAS_TABLE: &[(&str, &[&str])] = &[
    (
        "sst",
        &[
            "sst",
            "sea surface temperature",
            "sea_temperature",
            "seatemp",
            "seatempkelvin",
        ],
    ),
    (
        "cmi",
        &[
            "cmi",
            "reflectance",
            "radiance",
            "cloud moisture imagery",
            "abi_cmi",
        ],
    ),
    (
        "dust",
        &[
            "dust",
            "ducmass",
            "dust mass",
            "aerosol",
            "aerosol optical depth",
            "aod",
        ],
    ),
    (
        "landcover",
        &[
            "landcover",
            "land cover",
            "land_cover",
            "lc",
            "nlcd",
            "igbp",
            "vegetation_type",
        ],
    ),
    (
        "algaebloom",
        &["algaebloom", "algae", "algae bloom", "chlorophyll", "chl", "bloom"],
    ),
    (
        "acha",
        &[
            "acha",
            "cloud top height",
            "cloud height",
            "cldtop_ht",
            "cth",
            "cloud_top_ht",
            "cloud_top_pressure",
        ],
    ),
    ("actp", &["actp", "cloud type", "cld_type", "ct"]),
    (
        "acm",
        &["acm", "cloud mask", "clear sky mask", "clear_mask", "cldmask"],
    ),
    ("achp", &["achp", "cloud phase", "cld_phase", "phase"]),
    (
        "adp",
        &["adp", "aerosol detection", "smoke", "aod_flag"],
    ),
    (
        "dsi",
        &["dsi", "stability index", "lifted index", "li", "cape", "cin"],
    ),
    (
        "rrqpef",
        &["rrqpef", "rrqpe", "rain rate", "precipitation rate", "precip_rate"],
    ),
    (
        "tpwf",
        &["tpwf", "total precipitable water", "tpw", "pw"],
    ),
    (
        "lstf",
        &["lstf", "land surface temperature", "lst", "surface temp"],
    ),
    (
        "ccl",
        &[
            "ccl",
            "cloud condensation level",
            "cloud base",
            "cloud base height",
            "cbh",
        ],
    ),
];

static ALIAS_LOOKUP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (canonical, aliases) in ALIAS_TABLE {
        for alias in *aliases {
            let previous = map.insert(*alias, *canonical);
            debug_assert!(
                previous.is_none(),
                "alias {alias:?} claimed by {previous:?} and {canonical:?}"
            );
        }
    }
    map
});

/// Resolve a free-form variable name to its canonical id.
///
/// Unknown names are not rejected: the trimmed, lower-cased input comes
/// back unchanged and classification falls through to the gradient rule.
pub fn normalize(raw: &str) -> String {
    let cleaned = raw.trim().to_lowercase();
    match ALIAS_LOOKUP.get(cleaned.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::{ALIAS_TABLE, normalize};
    use std::collections::HashSet;

    #[test]
    fn aliases_resolve_to_their_canonical_id() {
        for (canonical, aliases) in ALIAS_TABLE {
            for alias in *aliases {
                assert_eq!(normalize(alias), *canonical, "alias {alias:?}");
                // Case and surrounding whitespace are immaterial.
                let shouty = format!("  {}  ", alias.to_uppercase());
                assert_eq!(normalize(&shouty), *canonical, "alias {alias:?}");
            }
        }
    }

    #[test]
    fn known_display_names_resolve() {
        assert_eq!(normalize("Sea Surface Temperature"), "sst");
        assert_eq!(normalize("DUCMASS"), "dust");
        assert_eq!(normalize("seaTempKelvin"), "sst");
        assert_eq!(normalize("Chlorophyll"), "algaebloom");
    }

    #[test]
    fn unknown_names_pass_through_cleaned() {
        assert_eq!(normalize("  Mystery Var "), "mystery var");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["SST", "Sea Surface Temperature", "mystery var", "", "  lc "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn alias_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for (_canonical, aliases) in ALIAS_TABLE {
            for alias in *aliases {
                assert!(seen.insert(*alias), "alias {alias:?} appears twice");
            }
        }
    }

    #[test]
    fn aliases_are_stored_pre_cleaned() {
        for (_canonical, aliases) in ALIAS_TABLE {
            for alias in *aliases {
                assert_eq!(*alias, alias.trim().to_lowercase(), "alias {alias:?}");
            }
        }
    }
}
