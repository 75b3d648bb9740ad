use foundation::geo::GeoBounds;

/// Raster overlay opacity, shared by every member of the group.
pub const OVERLAY_OPACITY: f64 = 0.8;

/// Members of the raster exclusivity group. At most one is visible at
/// a time; the compositor holds the selection as a single
/// `Option<OverlayKind>` so a second active member is unrepresentable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    PrimaryObservation,
    SecondaryObservation,
    Forecast,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [
        OverlayKind::PrimaryObservation,
        OverlayKind::SecondaryObservation,
        OverlayKind::Forecast,
    ];

    pub fn id(self) -> &'static str {
        match self {
            OverlayKind::PrimaryObservation => "primary-observation",
            OverlayKind::SecondaryObservation => "secondary-observation",
            OverlayKind::Forecast => "forecast",
        }
    }

    /// Stable locator the rendering surface resolves to an image.
    pub fn source_locator(self) -> &'static str {
        match self {
            OverlayKind::PrimaryObservation => "sst_today_overlay",
            OverlayKind::SecondaryObservation => "dust_today_overlay",
            OverlayKind::Forecast => "predicted_sst_tomorrow_overlay",
        }
    }
}

/// A full-globe image overlay for one time-stamped product.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRaster {
    pub kind: OverlayKind,
    pub source: String,
    pub bounds: GeoBounds,
    pub opacity: f64,
}

impl OverlayRaster {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            source: kind.source_locator().to_string(),
            bounds: GeoBounds::WORLD,
            opacity: OVERLAY_OPACITY,
        }
    }
}
