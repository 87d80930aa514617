pub mod catalog;
pub mod domain;
pub mod filter;
pub mod input;
pub mod labels;

pub use catalog::{load_catalog, resolve_catalog, CatalogError, CatalogLoader};
pub use domain::{Category, Coordinate, Listing, ListingId, UnknownCategory};
pub use filter::{evaluate_filters, FilterCriteria, DEFAULT_GUEST_MINIMUM, PRICE_SLIDER_DEFAULT};
pub use input::{FilterInputError, FilterRequest, FilterSubmission, StayDates};
pub use labels::{amenity_display_label, results_count_label, AmenityLabel};
