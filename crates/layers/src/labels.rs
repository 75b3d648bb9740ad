use foundation::geo::{LonLat, polygon_area_m2};
use formats::Feature;

/// Minimum spherical area (square meters) for a feature to earn a
/// persistent label. Keeps small polygons and islands from cluttering
/// the map.
pub const AREA_THRESHOLD_M2: f64 = 5.0e11;

/// Property keys tried in order when resolving a display name.
pub const NAME_PRIORITY: [&str; 3] = ["NAME", "name", "ADMIN"];
pub const FALLBACK_NAME: &str = "Country";

/// CSS class the rendering surface applies to boundary labels.
pub const LABEL_CLASS: &str = "country-label";

/// A boundary feature that passed the area filter. The anchor is the
/// vertex centroid; the label hangs above it. Overlap avoidance is
/// left to the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCandidate {
    pub text: String,
    pub anchor: LonLat,
    pub area_m2: f64,
}

/// Select the boundary features that receive a persistent label.
///
/// Non-polygon features never qualify. Features at or above the
/// threshold always do.
pub fn place_labels(features: &[Feature], area_threshold_m2: f64) -> Vec<LabelCandidate> {
    let mut out = Vec::new();
    for feature in features {
        let polygons = feature.geometry.polygons();
        if polygons.is_empty() {
            continue;
        }

        let area_m2: f64 = polygons.iter().map(|rings| polygon_area_m2(rings)).sum();
        if area_m2 < area_threshold_m2 {
            continue;
        }

        let Some(anchor) = outer_ring_centroid(&polygons) else {
            continue;
        };

        let text = feature
            .first_named(&NAME_PRIORITY)
            .unwrap_or(FALLBACK_NAME)
            .to_string();

        out.push(LabelCandidate {
            text,
            anchor,
            area_m2,
        });
    }
    out
}

/// Mean of every outer-ring vertex across the feature's polygons,
/// closing duplicates excluded.
fn outer_ring_centroid(polygons: &[&Vec<Vec<LonLat>>]) -> Option<LonLat> {
    let mut sum_lon = 0.0;
    let mut sum_lat = 0.0;
    let mut count = 0.0_f64;

    for rings in polygons {
        let Some(outer) = rings.first() else {
            continue;
        };
        let mut pts: &[LonLat] = outer;
        if pts.len() >= 2 {
            let first = pts[0];
            let last = pts[pts.len() - 1];
            if (first.lon_deg - last.lon_deg).abs() < 1e-9
                && (first.lat_deg - last.lat_deg).abs() < 1e-9
            {
                pts = &pts[..pts.len() - 1];
            }
        }
        for p in pts {
            if p.is_finite() {
                sum_lon += p.lon_deg;
                sum_lat += p.lat_deg;
                count += 1.0;
            }
        }
    }

    if count <= 0.0 {
        return None;
    }
    Some(LonLat::new(sum_lon / count, sum_lat / count))
}
