use std::sync::Arc;

use foundation::color::Color;
use formats::FeatureCollection;

use crate::boundary::BoundaryKind;
use crate::frame::BasemapSpec;
use crate::overlay::OverlayRaster;
use crate::points::PointLayerSnapshot;

/// Rendering-surface pane a layer is assigned to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pane {
    Tile,
    Overlay,
    Marker,
}

/// Zoom levels (inclusive) a layer is shown at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl ZoomRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }
}

/// Stroke/fill styling for vector layers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathStyle {
    pub stroke: Option<Color>,
    pub weight: f64,
    pub fill: Option<Color>,
    pub fill_opacity: f64,
}

impl PathStyle {
    pub const fn stroke_only(color: Color, weight: f64) -> Self {
        Self {
            stroke: Some(color),
            weight,
            fill: None,
            fill_opacity: 0.0,
        }
    }
}

/// Payload of one composed layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerSource {
    BasemapTiles(BasemapSpec),
    Boundary {
        kind: BoundaryKind,
        data: Arc<FeatureCollection>,
        style: PathStyle,
    },
    OverlayImage(OverlayRaster),
    Points(PointLayerSnapshot),
}

/// One entry of the composed stack, ready for direct rendering.
/// Hidden or absent layers are omitted from the stack rather than
/// emitted with `visible` cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub id: &'static str,
    pub pane: Pane,
    pub z_index: i32,
    pub zoom_range: Option<ZoomRange>,
    pub visible: bool,
    pub source: LayerSource,
}

/// Fixed draw-order slots. Later layers sit above earlier ones.
pub mod zindex {
    pub const BASEMAP: i32 = 0;
    pub const WATER: i32 = 50;
    pub const LAND: i32 = 200;
    pub const COASTLINE: i32 = 210;
    pub const STATE: i32 = 220;
    pub const COUNTRY: i32 = 230;
    pub const OVERLAY: i32 = 500;
    pub const POINTS: i32 = 650;
}
