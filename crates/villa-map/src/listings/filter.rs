use super::domain::{Category, Listing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Guest minimum applied when the criteria leave it unset.
pub const DEFAULT_GUEST_MINIMUM: u16 = 2;

/// Resting position of the price slider. It is a display default only: an
/// unset ceiling filters nothing out.
pub const PRICE_SLIDER_DEFAULT: u32 = 2000;

/// User-selected constraints, rebuilt from input state on every filter event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub guests: Option<u16>,
    #[serde(default)]
    pub max_price: Option<u32>,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    /// Hard requirements: a listing must carry every one.
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    /// Preferences: a listing must carry at least one.
    #[serde(default)]
    pub activities: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_guests(mut self, guests: u16) -> Self {
        self.guests = Some(guests);
        self
    }

    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.insert(amenity.into());
        self
    }

    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activities.insert(activity.into());
        self
    }

    pub fn guest_minimum(&self) -> u16 {
        self.guests.unwrap_or(DEFAULT_GUEST_MINIMUM)
    }

    /// Returns `true` when the listing satisfies every clause at once.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_location(listing)
            && listing.guests >= self.guest_minimum()
            && self.max_price.map_or(true, |ceiling| listing.price <= ceiling)
            && (self.categories.is_empty() || self.categories.contains(&listing.category))
            && self
                .amenities
                .iter()
                .all(|amenity| listing.has_amenity(amenity))
            && (self.activities.is_empty()
                || self
                    .activities
                    .iter()
                    .any(|activity| listing.has_activity(activity)))
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        match self.location.as_deref() {
            None | Some("") => true,
            Some(needle) => listing
                .location
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Stable filter over the catalog; the result keeps catalog order.
pub fn evaluate_filters(criteria: &FilterCriteria, catalog: &[Listing]) -> Vec<Listing> {
    catalog
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::catalog::load_catalog;
    use crate::listings::domain::ListingId;

    fn ids(listings: &[Listing]) -> Vec<u32> {
        listings.iter().map(|listing| listing.id.0).collect()
    }

    #[test]
    fn default_criteria_keep_full_catalog_in_order() {
        let catalog = load_catalog();
        let result = evaluate_filters(&FilterCriteria::default(), &catalog);
        assert_eq!(result, catalog);
    }

    #[test]
    fn price_ceiling_and_guest_minimum_combine() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default()
            .with_max_price(2200)
            .with_guests(2);

        let result = evaluate_filters(&criteria, &catalog);

        assert_eq!(ids(&result), vec![3, 12, 14]);
        let pairs: Vec<(u32, u16)> = result
            .iter()
            .map(|listing| (listing.price, listing.guests))
            .collect();
        assert_eq!(pairs, vec![(2000, 12), (2200, 6), (1200, 4)]);
    }

    #[test]
    fn location_match_ignores_case() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default().with_location("IBIZA");
        let result = evaluate_filters(&criteria, &catalog);
        assert_eq!(ids(&result), vec![7, 8, 9, 10, 11, 12]);

        let accented = FilterCriteria::default().with_location("méxico");
        assert_eq!(evaluate_filters(&accented, &catalog).len(), 6);
    }

    #[test]
    fn empty_location_is_unrestricted() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default().with_location("");
        assert_eq!(evaluate_filters(&criteria, &catalog).len(), catalog.len());
    }

    #[test]
    fn guest_minimum_excludes_small_listings() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default().with_guests(18);
        assert_eq!(ids(&evaluate_filters(&criteria, &catalog)), vec![2, 4, 6]);
    }

    #[test]
    fn amenities_require_every_tag() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default()
            .with_amenity("gym")
            .with_amenity("chef");
        assert_eq!(ids(&evaluate_filters(&criteria, &catalog)), vec![4, 8]);
    }

    #[test]
    fn activities_accept_any_tag() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default()
            .with_activity("golf")
            .with_activity("shopping");
        assert_eq!(
            ids(&evaluate_filters(&criteria, &catalog)),
            vec![6, 7, 8, 9, 12, 13]
        );
    }

    #[test]
    fn categories_restrict_membership() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default()
            .with_category(Category::City)
            .with_category(Category::PrivateIsland);
        assert_eq!(ids(&evaluate_filters(&criteria, &catalog)), vec![6, 9, 12]);
    }

    #[test]
    fn unknown_amenity_filters_everything_out() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default().with_amenity("yacht");
        assert!(evaluate_filters(&criteria, &catalog).is_empty());
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default()
            .with_location("lisboa")
            .with_activity("spa");
        let first = evaluate_filters(&criteria, &catalog);
        let second = evaluate_filters(&criteria, &catalog);
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![13, 14, 15]);
    }

    #[test]
    fn every_clause_must_hold() {
        let catalog = load_catalog();
        let criteria = FilterCriteria::default()
            .with_location("tulum")
            .with_guests(12)
            .with_max_price(3000)
            .with_category(Category::Beachfront)
            .with_amenity("infinity-pool")
            .with_activity("spa");

        let result = evaluate_filters(&criteria, &catalog);

        assert_eq!(ids(&result), vec![1, 5]);
        for listing in &catalog {
            let included = result.iter().any(|kept| kept.id == listing.id);
            let expected = listing.location.to_lowercase().contains("tulum")
                && listing.guests >= 12
                && listing.price <= 3000
                && listing.category == Category::Beachfront
                && listing.has_amenity("infinity-pool")
                && listing.has_activity("spa");
            assert_eq!(included, expected, "listing {}", listing.id);
        }
        assert!(!result.iter().any(|listing| listing.id == ListingId(3)));
    }
}
