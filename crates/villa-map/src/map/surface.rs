use serde::{Deserialize, Serialize};

use super::popup::PopupContent;
use crate::listings::domain::{Coordinate, Listing};
use crate::listings::labels::{format_price, MARKER_ICON};

/// Opaque handle the surface hands back for each marker it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerHandle(pub u64);

/// What the marker pin shows, plus when to reveal it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerContent {
    pub icon: &'static str,
    pub price_label: String,
    /// Presentation-only delay before the marker appears.
    pub reveal_delay_ms: u64,
}

impl MarkerContent {
    pub fn for_listing(listing: &Listing, reveal_delay_ms: u64) -> Self {
        Self {
            icon: MARKER_ICON,
            price_label: format_price(listing.price),
            reveal_delay_ms,
        }
    }
}

/// Axis-aligned region spanning a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn around(coordinate: Coordinate) -> Self {
        Self {
            south_west: coordinate,
            north_east: coordinate,
        }
    }

    pub fn extend(&mut self, coordinate: Coordinate) {
        self.south_west.lng = self.south_west.lng.min(coordinate.lng);
        self.south_west.lat = self.south_west.lat.min(coordinate.lat);
        self.north_east.lng = self.north_east.lng.max(coordinate.lng);
        self.north_east.lat = self.north_east.lat.max(coordinate.lat);
    }

    /// `None` when there is nothing to bound.
    pub fn from_coordinates<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut coordinates = coordinates.into_iter();
        let mut bounds = Self::around(coordinates.next()?);
        for coordinate in coordinates {
            bounds.extend(coordinate);
        }
        Some(bounds)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (self.south_west.lng..=self.north_east.lng).contains(&coordinate.lng)
            && (self.south_west.lat..=self.north_east.lat).contains(&coordinate.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitOptions {
    pub padding: u32,
    pub duration_ms: u64,
}

/// The mapping widget. Every call is a fire-and-forget command; the surface
/// owns the rendering resources behind each handle until told to remove it.
pub trait MapSurface {
    fn create_marker(&mut self, coordinate: Coordinate, content: MarkerContent) -> MarkerHandle;
    fn attach_popup(&mut self, handle: MarkerHandle, popup: PopupContent);
    fn remove_marker(&mut self, handle: MarkerHandle);
    fn fit_bounds(&mut self, bounds: Bounds, options: FitOptions);
    /// Moves the camera, animating over `duration_ms` (zero jumps).
    fn set_center(&mut self, center: Coordinate, zoom: f64, duration_ms: u64);
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
}
