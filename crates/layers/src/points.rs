use foundation::color::Color;
use foundation::geo::LonLat;
use formats::{Feature, FeatureCollection, value_as_f64};
use serde_json::Value;

use crate::classify::color_for;
use crate::legend::Legend;
use crate::variables::normalize;

pub const POINT_RADIUS_PX: f64 = 4.0;
pub const POINT_STROKE_WEIGHT: f64 = 0.5;
pub const POINT_FILL_OPACITY: f64 = 0.8;

/// One circle marker of the uploaded-data layer. Stroke and fill share
/// the classified color.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPoint {
    pub position: LonLat,
    pub color: Color,
    pub radius_px: f64,
    pub weight: f64,
    pub fill_opacity: f64,
    /// Tooltip content: one `key: value` line per property, in
    /// property order.
    pub tooltip: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLayerSnapshot {
    pub points: Vec<StyledPoint>,
    pub legend: Legend,
}

/// Style uploaded point data against the selected variable.
///
/// Each feature is colored from its own property named by the
/// normalized variable; when that property is absent the first
/// available property stands in. Non-point geometry is ignored.
pub fn build_point_layer(collection: &FeatureCollection, raw_variable: &str) -> PointLayerSnapshot {
    let key = normalize(raw_variable);

    let mut points = Vec::new();
    for feature in &collection.features {
        let positions = feature.geometry.points();
        if positions.is_empty() {
            continue;
        }

        let value = feature.property_or_first(&key).and_then(value_as_f64);
        let color = color_for(&key, value);
        let tooltip = tooltip_lines(feature);

        for position in positions {
            points.push(StyledPoint {
                position,
                color,
                radius_px: POINT_RADIUS_PX,
                weight: POINT_STROKE_WEIGHT,
                fill_opacity: POINT_FILL_OPACITY,
                tooltip: tooltip.clone(),
            });
        }
    }

    PointLayerSnapshot {
        points,
        legend: Legend::for_variable(raw_variable),
    }
}

/// `key: value` lines for every property of a feature.
pub fn tooltip_lines(feature: &Feature) -> Vec<String> {
    feature
        .properties
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{k}: {s}"),
            other => format!("{k}: {other}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{POINT_RADIUS_PX, build_point_layer, tooltip_lines};
    use crate::classify::NEUTRAL;
    use foundation::color::Color;
    use formats::FeatureCollection;
    use serde_json::json;

    fn collection(features: serde_json::Value) -> FeatureCollection {
        FeatureCollection::from_geojson_value(&json!({
            "type": "FeatureCollection",
            "features": features,
        }))
        .expect("parse")
    }

    fn point(props: serde_json::Value) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": props,
            "geometry": { "type": "Point", "coordinates": [-35.0, 15.0] }
        })
    }

    #[test]
    fn points_are_colored_from_the_selected_variable() {
        let fc = collection(json!([point(json!({"sst": -5.0, "site": "A"}))]));
        let snapshot = build_point_layer(&fc, "Sea Surface Temperature");
        assert_eq!(snapshot.points.len(), 1);
        assert_eq!(snapshot.points[0].color, Color::from_rgb24(0x313695));
        assert_eq!(snapshot.points[0].radius_px, POINT_RADIUS_PX);
    }

    #[test]
    fn missing_variable_falls_back_to_first_property() {
        // No "sst" property; "chl" (first) supplies the value.
        let fc = collection(json!([point(json!({"chl": 29.0}))]));
        let snapshot = build_point_layer(&fc, "sst");
        assert_eq!(snapshot.points[0].color, Color::from_rgb24(0xf46d43));
    }

    #[test]
    fn empty_property_bag_classifies_neutral() {
        let fc = collection(json!([point(json!({}))]));
        let snapshot = build_point_layer(&fc, "sst");
        assert_eq!(snapshot.points[0].color, NEUTRAL);
    }

    #[test]
    fn numeric_strings_classify_like_numbers() {
        let fc = collection(json!([point(json!({"sst": "29"}))]));
        let snapshot = build_point_layer(&fc, "SST");
        assert_eq!(snapshot.points[0].color, Color::from_rgb24(0xf46d43));
    }

    #[test]
    fn legend_uses_the_raw_display_name() {
        let fc = collection(json!([point(json!({"sst": 1.0}))]));
        let snapshot = build_point_layer(&fc, "Sea Surface Temperature");
        assert_eq!(snapshot.legend.title, "Sea Surface Temperature");
    }

    #[test]
    fn tooltip_renders_all_properties_in_order() {
        let fc = collection(json!([point(json!({"site": "buoy-7", "sst": 21.5, "flag": null}))]));
        let lines = tooltip_lines(&fc.features[0]);
        assert_eq!(lines, vec!["site: buoy-7", "sst: 21.5", "flag: null"]);
    }

    #[test]
    fn multi_point_features_share_style_and_tooltip() {
        let fc = collection(json!([{
            "type": "Feature",
            "properties": {"dust": 0.4},
            "geometry": { "type": "MultiPoint", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
        }]));
        let snapshot = build_point_layer(&fc, "dust");
        assert_eq!(snapshot.points.len(), 2);
        assert_eq!(snapshot.points[0].color, snapshot.points[1].color);
        assert_eq!(snapshot.points[0].tooltip, snapshot.points[1].tooltip);
    }
}
