use std::collections::BTreeSet;

use crate::listings::domain::{Coordinate, Listing, ListingId};
use crate::listings::load_catalog;
use crate::map::popup::PopupContent;
use crate::map::presenter::{MapPresenter, PresenterOptions};
use crate::map::recording::{MapCommand, RecordingSurface};
use crate::map::surface::{Bounds, FitOptions, MapSurface, MarkerContent, MarkerHandle};

pub(super) fn catalog() -> Vec<Listing> {
    load_catalog()
}

pub(super) fn listings_with_ids(ids: &[u32]) -> Vec<Listing> {
    catalog()
        .into_iter()
        .filter(|listing| ids.contains(&listing.id.0))
        .collect()
}

pub(super) fn id_set(ids: &[u32]) -> BTreeSet<ListingId> {
    ids.iter().copied().map(ListingId).collect()
}

pub(super) fn presenter() -> MapPresenter<RecordingSurface> {
    MapPresenter::new(
        RecordingSurface::default(),
        catalog(),
        PresenterOptions::default(),
    )
}

pub(super) fn created_handles(commands: &[MapCommand]) -> Vec<MarkerHandle> {
    commands
        .iter()
        .filter_map(|command| match command {
            MapCommand::CreateMarker { handle, .. } => Some(*handle),
            _ => None,
        })
        .collect()
}

pub(super) fn removed_handles(commands: &[MapCommand]) -> Vec<MarkerHandle> {
    commands
        .iter()
        .filter_map(|command| match command {
            MapCommand::RemoveMarker { handle } => Some(*handle),
            _ => None,
        })
        .collect()
}

pub(super) fn reveal_delays(commands: &[MapCommand]) -> Vec<u64> {
    commands
        .iter()
        .filter_map(|command| match command {
            MapCommand::CreateMarker { content, .. } => Some(content.reveal_delay_ms),
            _ => None,
        })
        .collect()
}

pub(super) fn fit_count(commands: &[MapCommand]) -> usize {
    commands
        .iter()
        .filter(|command| matches!(command, MapCommand::FitBounds { .. }))
        .count()
}

/// Surface that only counts calls, for exercising the reconcile step behind a trait object.
#[derive(Default)]
pub(super) struct TallySurface {
    pub(super) next: u64,
    pub(super) created: usize,
    pub(super) popups: usize,
    pub(super) removed: Vec<MarkerHandle>,
    pub(super) fits: Vec<Bounds>,
}

impl MapSurface for TallySurface {
    fn create_marker(&mut self, _coordinate: Coordinate, _content: MarkerContent) -> MarkerHandle {
        self.next += 1;
        self.created += 1;
        MarkerHandle(self.next)
    }

    fn attach_popup(&mut self, _handle: MarkerHandle, _popup: PopupContent) {
        self.popups += 1;
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.removed.push(handle);
    }

    fn fit_bounds(&mut self, bounds: Bounds, _options: FitOptions) {
        self.fits.push(bounds);
    }

    fn set_center(&mut self, _center: Coordinate, _zoom: f64, _duration_ms: u64) {}

    fn zoom_in(&mut self) {}

    fn zoom_out(&mut self) {}
}
