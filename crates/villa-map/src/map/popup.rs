use maud::{html, Markup};
use serde::Serialize;

use crate::listings::domain::{Listing, ListingId};
use crate::listings::labels::{
    amenity_display_label, guest_label, nightly_price_label, AmenityLabel,
};

pub const BOOK_NOW_LABEL: &str = "Book Now";

/// Structured popup body; surfaces that take markup use [`PopupContent::render_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub listing_id: ListingId,
    pub image: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_label: String,
    pub guests_label: String,
    pub amenities: Vec<AmenityLabel>,
    /// Placeholder action; booking is not wired to anything.
    pub action_label: &'static str,
}

impl PopupContent {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            listing_id: listing.id,
            image: listing.image.clone(),
            name: listing.name.clone(),
            location: listing.location.clone(),
            description: listing.description.clone(),
            price_label: nightly_price_label(listing.price),
            guests_label: guest_label(listing.guests),
            amenities: listing
                .amenities
                .iter()
                .map(|tag| amenity_display_label(tag))
                .collect(),
            action_label: BOOK_NOW_LABEL,
        }
    }

    pub fn markup(&self) -> Markup {
        html! {
            div class="villa-popup-content" {
                img src=(self.image) alt=(self.name) class="villa-popup-image";
                div class="villa-popup-info" {
                    h3 { (self.name) }
                    p class="villa-location" { "📍 " (self.location) }
                    p class="villa-description" { (self.description) }
                    div class="villa-details" {
                        span class="villa-price" { (self.price_label) }
                        span class="villa-guests" { "👥 " (self.guests_label) }
                    }
                    div class="villa-amenities" {
                        @for amenity in &self.amenities {
                            span class="amenity-tag" { (amenity.to_string()) }
                        }
                    }
                    button class="villa-book-btn" type="button" { (self.action_label) }
                }
            }
        }
    }

    pub fn render_html(&self) -> String {
        self.markup().into_string()
    }
}
