//! Marker placement for filtered listings on a pluggable map surface.

pub mod popup;
pub mod presenter;
pub mod recording;
pub mod surface;

#[cfg(test)]
mod tests;

pub use popup::PopupContent;
pub use presenter::{
    reconcile_markers, MapPresenter, MarkerBinding, PresenterOptions, WORLD_CENTER, WORLD_ZOOM,
};
pub use recording::{LiveMarker, MapCommand, RecordingSurface};
pub use surface::{Bounds, FitOptions, MapSurface, MarkerContent, MarkerHandle};
