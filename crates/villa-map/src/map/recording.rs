use std::collections::BTreeMap;

use serde::Serialize;

use super::popup::PopupContent;
use super::presenter::{WORLD_CENTER, WORLD_ZOOM};
use super::surface::{Bounds, FitOptions, MapSurface, MarkerContent, MarkerHandle};
use crate::listings::domain::Coordinate;

const MIN_ZOOM: f64 = 0.0;
const MAX_ZOOM: f64 = 22.0;

/// Every command a [`RecordingSurface`] has received, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MapCommand {
    CreateMarker {
        handle: MarkerHandle,
        coordinate: Coordinate,
        content: MarkerContent,
    },
    AttachPopup {
        handle: MarkerHandle,
        popup: PopupContent,
        html: String,
    },
    RemoveMarker {
        handle: MarkerHandle,
    },
    FitBounds {
        bounds: Bounds,
        options: FitOptions,
    },
    SetCenter {
        center: Coordinate,
        zoom: f64,
        duration_ms: u64,
    },
    ZoomIn,
    ZoomOut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveMarker {
    pub coordinate: Coordinate,
    pub content: MarkerContent,
    pub popup: Option<PopupContent>,
}

/// In-memory surface that tracks live markers and logs commands so a client
/// can replay them against a real map widget.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    next_handle: u64,
    live: BTreeMap<MarkerHandle, LiveMarker>,
    commands: Vec<MapCommand>,
    center: Coordinate,
    zoom: f64,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            next_handle: 1,
            live: BTreeMap::new(),
            commands: Vec::new(),
            center: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        }
    }
}

impl RecordingSurface {
    pub fn commands(&self) -> &[MapCommand] {
        &self.commands
    }

    pub fn drain_commands(&mut self) -> Vec<MapCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn live_markers(&self) -> &BTreeMap<MarkerHandle, LiveMarker> {
        &self.live
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl MapSurface for RecordingSurface {
    fn create_marker(&mut self, coordinate: Coordinate, content: MarkerContent) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(
            handle,
            LiveMarker {
                coordinate,
                content: content.clone(),
                popup: None,
            },
        );
        self.commands.push(MapCommand::CreateMarker {
            handle,
            coordinate,
            content,
        });
        handle
    }

    fn attach_popup(&mut self, handle: MarkerHandle, popup: PopupContent) {
        if let Some(marker) = self.live.get_mut(&handle) {
            marker.popup = Some(popup.clone());
        }
        let html = popup.render_html();
        self.commands
            .push(MapCommand::AttachPopup { handle, popup, html });
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.live.remove(&handle);
        self.commands.push(MapCommand::RemoveMarker { handle });
    }

    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions) {
        self.center = Coordinate::new(
            (bounds.south_west.lng + bounds.north_east.lng) / 2.0,
            (bounds.south_west.lat + bounds.north_east.lat) / 2.0,
        );
        self.commands.push(MapCommand::FitBounds { bounds, options });
    }

    fn set_center(&mut self, center: Coordinate, zoom: f64, duration_ms: u64) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.commands.push(MapCommand::SetCenter {
            center,
            zoom,
            duration_ms,
        });
    }

    fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(MAX_ZOOM);
        self.commands.push(MapCommand::ZoomIn);
    }

    fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(MIN_ZOOM);
        self.commands.push(MapCommand::ZoomOut);
    }
}
