use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, info};

use super::popup::PopupContent;
use super::surface::{Bounds, FitOptions, MapSurface, MarkerContent, MarkerHandle};
use crate::listings::domain::{Coordinate, Listing, ListingId};
use crate::listings::filter::{evaluate_filters, FilterCriteria};
use crate::listings::labels::results_count_label;

/// Initial and "reset view" camera position.
pub const WORLD_CENTER: Coordinate = Coordinate::new(0.0, 20.0);
pub const WORLD_ZOOM: f64 = 1.5;

/// Tunables for marker placement and viewport fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Delay between successive new markers appearing; zero shows them at once.
    pub stagger_step_ms: u64,
    pub fit_padding: u32,
    pub fit_duration_ms: u64,
    /// Fly-to duration when the view returns to the world overview.
    pub reset_view_duration_ms: u64,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            stagger_step_ms: 100,
            fit_padding: 50,
            fit_duration_ms: 1000,
            reset_view_duration_ms: 2000,
        }
    }
}

impl PresenterOptions {
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            padding: self.fit_padding,
            duration_ms: self.fit_duration_ms,
        }
    }
}

/// One filtered listing bound to its live marker (and the popup attached to it).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerBinding {
    pub listing_id: ListingId,
    pub coordinate: Coordinate,
    pub marker: MarkerHandle,
}

/// Brings the binding set in line with `filtered`.
///
/// Bindings whose listing dropped out are removed from the surface, listings
/// without a binding get a marker and popup, and bindings that survive keep
/// their handle. The result follows `filtered` order. Newly created markers
/// are revealed one `stagger_step_ms` apart; the delay travels with the
/// marker, so removing it later also cancels a pending reveal. Finally the
/// viewport is fitted to every bound coordinate, unless nothing is bound.
pub fn reconcile_markers<S>(
    surface: &mut S,
    previous: Vec<MarkerBinding>,
    filtered: &[Listing],
    options: &PresenterOptions,
) -> Vec<MarkerBinding>
where
    S: MapSurface + ?Sized,
{
    let wanted: BTreeSet<ListingId> = filtered.iter().map(|listing| listing.id).collect();
    let mut retained: HashMap<ListingId, MarkerBinding> = HashMap::new();
    let mut removed = 0usize;

    for binding in previous {
        if !wanted.contains(&binding.listing_id) {
            surface.remove_marker(binding.marker);
            removed += 1;
            continue;
        }
        match retained.get(&binding.listing_id).map(|kept| kept.marker) {
            None => {
                retained.insert(binding.listing_id, binding);
            }
            Some(kept) if kept == binding.marker => {}
            Some(_) => {
                surface.remove_marker(binding.marker);
                removed += 1;
            }
        }
    }

    let mut bindings = Vec::with_capacity(filtered.len());
    let mut created = 0u64;

    for listing in filtered {
        if bindings
            .iter()
            .any(|binding: &MarkerBinding| binding.listing_id == listing.id)
        {
            continue;
        }

        if let Some(binding) = retained.remove(&listing.id) {
            bindings.push(binding);
            continue;
        }

        let delay = created * options.stagger_step_ms;
        let marker = surface.create_marker(
            listing.coordinates,
            MarkerContent::for_listing(listing, delay),
        );
        surface.attach_popup(marker, PopupContent::from_listing(listing));
        created += 1;

        bindings.push(MarkerBinding {
            listing_id: listing.id,
            coordinate: listing.coordinates,
            marker,
        });
    }

    if let Some(bounds) = Bounds::from_coordinates(bindings.iter().map(|b| b.coordinate)) {
        surface.fit_bounds(bounds, options.fit_options());
    }

    debug!(
        removed,
        created,
        bound = bindings.len(),
        "reconciled map markers"
    );

    bindings
}

/// Owns the catalog, the latest criteria, the filtered result, and the
/// marker bindings on a single map surface.
pub struct MapPresenter<S> {
    surface: S,
    catalog: Vec<Listing>,
    criteria: FilterCriteria,
    filtered: Vec<Listing>,
    bindings: Vec<MarkerBinding>,
    options: PresenterOptions,
}

impl<S> MapPresenter<S>
where
    S: MapSurface,
{
    /// Shows the whole catalog and places its markers.
    pub fn new(surface: S, catalog: Vec<Listing>, options: PresenterOptions) -> Self {
        let filtered = catalog.clone();
        let mut presenter = Self {
            surface,
            catalog,
            criteria: FilterCriteria::default(),
            filtered,
            bindings: Vec::new(),
            options,
        };
        presenter.reconcile();
        info!(
            listings = presenter.catalog.len(),
            "map presenter initialized"
        );
        presenter
    }

    /// Replaces the active criteria and re-renders. Only the latest call matters.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> &[Listing] {
        self.criteria = criteria;
        self.filtered = evaluate_filters(&self.criteria, &self.catalog);
        self.reconcile();
        debug!(
            matched = self.filtered.len(),
            catalog = self.catalog.len(),
            "filters applied"
        );
        &self.filtered
    }

    pub fn reset_filters(&mut self) -> &[Listing] {
        self.apply_filters(FilterCriteria::default())
    }

    pub fn zoom_in(&mut self) {
        self.surface.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.surface.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.surface.set_center(
            WORLD_CENTER,
            WORLD_ZOOM,
            self.options.reset_view_duration_ms,
        );
    }

    fn reconcile(&mut self) {
        let previous = std::mem::take(&mut self.bindings);
        self.bindings =
            reconcile_markers(&mut self.surface, previous, &self.filtered, &self.options);
    }
}

impl<S> MapPresenter<S> {
    pub fn catalog(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Listing] {
        &self.filtered
    }

    pub fn bindings(&self) -> &[MarkerBinding] {
        &self.bindings
    }

    pub fn bound_ids(&self) -> BTreeSet<ListingId> {
        self.bindings
            .iter()
            .map(|binding| binding.listing_id)
            .collect()
    }

    pub fn results_label(&self) -> String {
        results_count_label(self.filtered.len())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
