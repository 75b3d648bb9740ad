/// Mean Earth radius (meters) used for spherical area sums.
pub const MEAN_RADIUS_M: f64 = 6_371_008.8;

/// A geographic coordinate in degrees, longitude first (GeoJSON order).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LonLat {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl LonLat {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    pub fn is_finite(&self) -> bool {
        self.lon_deg.is_finite() && self.lat_deg.is_finite()
    }
}

/// Axis-aligned geographic bounds in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub south_deg: f64,
    pub west_deg: f64,
    pub north_deg: f64,
    pub east_deg: f64,
}

impl GeoBounds {
    /// Full-globe bounds; raster overlays always cover this extent.
    pub const WORLD: GeoBounds = GeoBounds {
        south_deg: -90.0,
        west_deg: -180.0,
        north_deg: 90.0,
        east_deg: 180.0,
    };

    pub const fn new(south_deg: f64, west_deg: f64, north_deg: f64, east_deg: f64) -> Self {
        Self {
            south_deg,
            west_deg,
            north_deg,
            east_deg,
        }
    }
}

/// Unsigned spherical area of one ring (square meters).
///
/// Chamberlain & Duquette line-integral form on a sphere of
/// `MEAN_RADIUS_M`. The closing edge is implied, so rings may arrive
/// with or without a duplicated last vertex.
pub fn ring_area_m2(ring: &[LonLat]) -> f64 {
    let mut pts: Vec<LonLat> = ring.to_vec();
    drop_closing_duplicate(&mut pts);
    if pts.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        if !a.is_finite() || !b.is_finite() {
            continue;
        }
        sum += (b.lon_deg - a.lon_deg).to_radians()
            * (2.0 + a.lat_deg.to_radians().sin() + b.lat_deg.to_radians().sin());
    }

    (sum * MEAN_RADIUS_M * MEAN_RADIUS_M / 2.0).abs()
}

/// Area of a polygon given as rings (outer first, holes after).
pub fn polygon_area_m2(rings: &[Vec<LonLat>]) -> f64 {
    let Some(outer) = rings.first() else {
        return 0.0;
    };
    let mut area = ring_area_m2(outer);
    for hole in &rings[1..] {
        area -= ring_area_m2(hole);
    }
    area.max(0.0)
}

/// Mean of the finite vertices of a ring, closing duplicate excluded.
pub fn vertex_centroid(ring: &[LonLat]) -> Option<LonLat> {
    let mut pts: Vec<LonLat> = ring.to_vec();
    drop_closing_duplicate(&mut pts);

    let mut sum_lon = 0.0;
    let mut sum_lat = 0.0;
    let mut count = 0.0_f64;
    for p in &pts {
        if p.is_finite() {
            sum_lon += p.lon_deg;
            sum_lat += p.lat_deg;
            count += 1.0;
        }
    }
    if count <= 0.0 {
        return None;
    }
    Some(LonLat::new(sum_lon / count, sum_lat / count))
}

fn drop_closing_duplicate(points: &mut Vec<LonLat>) {
    if points.len() >= 2 {
        let first = points[0];
        let last = *points.last().unwrap();
        if (first.lon_deg - last.lon_deg).abs() < 1e-9
            && (first.lat_deg - last.lat_deg).abs() < 1e-9
        {
            points.pop();
        }
    }
}
