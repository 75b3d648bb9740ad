use foundation::geo::{GeoBounds, LonLat};

/// The fixed equirectangular (EPSG:4326) viewing frame. Other
/// projections are out of scope.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFrame {
    pub center: LonLat,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Hard pan limit; the poles are cropped off the frame.
    pub max_bounds: GeoBounds,
    pub wrap: bool,
}

impl Default for MapFrame {
    fn default() -> Self {
        Self {
            center: LonLat::new(-35.0, 15.0),
            zoom: 2,
            min_zoom: 2,
            max_zoom: 8,
            max_bounds: GeoBounds::new(-85.0, -180.0, 85.0, 180.0),
            wrap: false,
        }
    }
}

/// Source descriptor for the basemap tile layer.
#[derive(Debug, Clone, PartialEq)]
pub struct BasemapSpec {
    pub url_template: String,
    pub attribution: String,
    pub tile_px: u32,
    pub wrap: bool,
}

impl Default for BasemapSpec {
    fn default() -> Self {
        Self {
            url_template: "https://gibs.earthdata.nasa.gov/wmts/epsg4326/best/VIIRS_CityLights_2012/default/2020-01-01/250m/{z}/{y}/{x}.jpg".to_string(),
            attribution: "NASA GIBS / VIIRS".to_string(),
            tile_px: 256,
            wrap: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MapFrame;

    #[test]
    fn default_frame_crops_the_poles() {
        let frame = MapFrame::default();
        assert_eq!(frame.max_bounds.south_deg, -85.0);
        assert_eq!(frame.max_bounds.north_deg, 85.0);
        assert!(frame.min_zoom <= frame.zoom && frame.zoom <= frame.max_zoom);
        assert!(!frame.wrap);
    }
}
