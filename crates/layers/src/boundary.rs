use foundation::color::Color;

use crate::layer::{Pane, PathStyle, ZoomRange, zindex};

/// Static geography layers drawn under the data overlays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    Ocean,
    Land,
    Coastline,
    State,
    Country,
}

impl BoundaryKind {
    /// Draw order, bottom first.
    pub const ALL: [BoundaryKind; 5] = [
        BoundaryKind::Ocean,
        BoundaryKind::Land,
        BoundaryKind::Coastline,
        BoundaryKind::State,
        BoundaryKind::Country,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BoundaryKind::Ocean => "ocean",
            BoundaryKind::Land => "land",
            BoundaryKind::Coastline => "coastline",
            BoundaryKind::State => "state",
            BoundaryKind::Country => "country",
        }
    }

    /// Dataset stem the external fetcher resolves to a source document.
    pub fn dataset(self) -> &'static str {
        match self {
            BoundaryKind::Ocean => "ocean",
            BoundaryKind::Land => "land_mask_simplified",
            BoundaryKind::Coastline => "coastline_simplified",
            BoundaryKind::State => "state_mask_simplified",
            BoundaryKind::Country => "simplified_countries",
        }
    }

    pub fn style(self) -> PathStyle {
        match self {
            BoundaryKind::Ocean => PathStyle {
                stroke: Some(Color::from_rgb24(0xcceeff)),
                weight: 0.0,
                fill: Some(Color::from_rgb24(0xcceeff)),
                fill_opacity: 0.6,
            },
            BoundaryKind::Land => PathStyle::stroke_only(Color::from_rgb24(0x808080), 0.5),
            BoundaryKind::Coastline => PathStyle {
                stroke: Some(Color::from_rgb24(0x000000)),
                weight: 1.0,
                fill: Some(Color::from_rgb24(0xeeeeee)),
                fill_opacity: 1.0,
            },
            BoundaryKind::State => PathStyle::stroke_only(Color::from_rgb24(0x000000), 0.8),
            BoundaryKind::Country => PathStyle::stroke_only(Color::from_rgb24(0x888888), 0.7),
        }
    }

    pub fn pane(self) -> Pane {
        match self {
            // Water sits with the basemap tiles; everything else draws
            // in the overlay pane.
            BoundaryKind::Ocean => Pane::Tile,
            _ => Pane::Overlay,
        }
    }

    pub fn z_index(self) -> i32 {
        match self {
            BoundaryKind::Ocean => zindex::WATER,
            BoundaryKind::Land => zindex::LAND,
            BoundaryKind::Coastline => zindex::COASTLINE,
            BoundaryKind::State => zindex::STATE,
            BoundaryKind::Country => zindex::COUNTRY,
        }
    }

    /// Land clutter is limited to mid zooms; other layers always show.
    pub fn zoom_range(self) -> Option<ZoomRange> {
        match self {
            BoundaryKind::Land => Some(ZoomRange::new(3, 6)),
            _ => None,
        }
    }
}

/// Terminal outcome of one boundary fetch. Sources are independent:
/// a failed fetch leaves its layer absent until the next full reload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Pending,
    Ready,
    Failed,
}
