use std::sync::Arc;

use formats::FeatureCollection;
use tracing::{debug, warn};

use crate::boundary::{BoundaryKind, SourceStatus};
use crate::frame::{BasemapSpec, MapFrame};
use crate::labels::{AREA_THRESHOLD_M2, LabelCandidate, place_labels};
use crate::layer::{LayerSource, LayerSpec, Pane, zindex};
use crate::overlay::{OverlayKind, OverlayRaster};
use crate::points::{PointLayerSnapshot, build_point_layer};

/// Reload generation for boundary deliveries. Fetches started before a
/// reload carry a stale generation and are dropped on arrival, so a
/// torn-down surface never sees late mutations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

/// Terminal result of one boundary fetch, delivered by the external
/// data source.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryOutcome {
    Ready(FeatureCollection),
    Failed(String),
}

#[derive(Debug, Clone)]
struct BoundarySlot {
    status: SourceStatus,
    data: Option<Arc<FeatureCollection>>,
}

impl BoundarySlot {
    fn pending() -> Self {
        Self {
            status: SourceStatus::Pending,
            data: None,
        }
    }
}

/// Owner of the declarative layer stack.
///
/// All mutation goes through the methods below; the composed stack is
/// a pure function of the current state, so composing twice with
/// identical state yields identical output.
#[derive(Debug)]
pub struct Compositor {
    pub frame: MapFrame,
    pub basemap: BasemapSpec,
    generation: Generation,
    boundaries: [BoundarySlot; BoundaryKind::ALL.len()],
    overlay: Option<OverlayKind>,
    points: Option<PointLayerSnapshot>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            frame: MapFrame::default(),
            basemap: BasemapSpec::default(),
            generation: Generation(0),
            boundaries: std::array::from_fn(|_| BoundarySlot::pending()),
            overlay: None,
            points: None,
        }
    }

    /// Generation current boundary fetches should be tagged with.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Full reload: every boundary slot returns to pending and
    /// deliveries tagged with an older generation are discarded.
    pub fn reset_boundaries(&mut self) -> Generation {
        self.generation.0 += 1;
        for slot in &mut self.boundaries {
            *slot = BoundarySlot::pending();
        }
        self.generation
    }

    /// Record the outcome of one boundary fetch. Sources arrive in any
    /// order; a failure leaves its one layer absent and never blocks
    /// the others.
    pub fn deliver_boundary(
        &mut self,
        generation: Generation,
        kind: BoundaryKind,
        outcome: BoundaryOutcome,
    ) {
        if generation != self.generation {
            debug!(
                kind = kind.id(),
                delivered = generation.0,
                current = self.generation.0,
                "stale boundary delivery dropped"
            );
            return;
        }

        let slot = &mut self.boundaries[slot_index(kind)];
        match outcome {
            BoundaryOutcome::Ready(data) => {
                slot.status = SourceStatus::Ready;
                slot.data = Some(Arc::new(data));
            }
            BoundaryOutcome::Failed(reason) => {
                warn!(kind = kind.id(), %reason, "boundary source failed; layer stays absent");
                slot.status = SourceStatus::Failed;
                slot.data = None;
            }
        }
    }

    pub fn boundary_status(&self, kind: BoundaryKind) -> SourceStatus {
        self.boundaries[slot_index(kind)].status
    }

    /// Select or deselect one raster overlay. Activating a member
    /// replaces whatever was selected; deactivating a member that is
    /// not selected changes nothing. Last explicit selection wins.
    pub fn set_overlay(&mut self, kind: OverlayKind, active: bool) {
        if active {
            self.overlay = Some(kind);
        } else if self.overlay == Some(kind) {
            self.overlay = None;
        }
    }

    pub fn active_overlay(&self) -> Option<OverlayKind> {
        self.overlay
    }

    /// Attach uploaded point data, styled against `raw_variable`.
    pub fn set_point_layer(&mut self, collection: &FeatureCollection, raw_variable: &str) {
        self.points = Some(build_point_layer(collection, raw_variable));
    }

    pub fn clear_point_layer(&mut self) {
        self.points = None;
    }

    /// Persistent labels for the country boundary layer. Empty until
    /// that source is ready.
    pub fn country_labels(&self) -> Vec<LabelCandidate> {
        let slot = &self.boundaries[slot_index(BoundaryKind::Country)];
        match &slot.data {
            Some(data) => place_labels(&data.features, AREA_THRESHOLD_M2),
            None => Vec::new(),
        }
    }

    /// The ordered stack, bottom first. Absent sources are omitted;
    /// a partial map composes from whatever arrived.
    pub fn compose_stack(&self) -> Vec<LayerSpec> {
        let mut stack = Vec::new();

        stack.push(LayerSpec {
            id: "basemap",
            pane: Pane::Tile,
            z_index: zindex::BASEMAP,
            zoom_range: None,
            visible: true,
            source: LayerSource::BasemapTiles(self.basemap.clone()),
        });

        for kind in BoundaryKind::ALL {
            let slot = &self.boundaries[slot_index(kind)];
            let Some(data) = &slot.data else {
                continue;
            };
            stack.push(LayerSpec {
                id: kind.id(),
                pane: kind.pane(),
                z_index: kind.z_index(),
                zoom_range: kind.zoom_range(),
                visible: true,
                source: LayerSource::Boundary {
                    kind,
                    data: Arc::clone(data),
                    style: kind.style(),
                },
            });
        }

        if let Some(kind) = self.overlay {
            stack.push(LayerSpec {
                id: kind.id(),
                pane: Pane::Overlay,
                z_index: zindex::OVERLAY,
                zoom_range: None,
                visible: true,
                source: LayerSource::OverlayImage(OverlayRaster::new(kind)),
            });
        }

        if let Some(points) = &self.points {
            stack.push(LayerSpec {
                id: "uploaded-points",
                pane: Pane::Marker,
                z_index: zindex::POINTS,
                zoom_range: None,
                visible: true,
                source: LayerSource::Points(points.clone()),
            });
        }

        stack
    }
}

fn slot_index(kind: BoundaryKind) -> usize {
    match kind {
        BoundaryKind::Ocean => 0,
        BoundaryKind::Land => 1,
        BoundaryKind::Coastline => 2,
        BoundaryKind::State => 3,
        BoundaryKind::Country => 4,
    }
}
