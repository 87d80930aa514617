use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longitude/latitude pair in the order the map widget expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Beachfront,
    City,
    Mountain,
    PrivateIsland,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Beachfront,
            Self::City,
            Self::Mountain,
            Self::PrivateIsland,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beachfront => "beachfront",
            Self::City => "city",
            Self::Mountain => "mountain",
            Self::PrivateIsland => "private-island",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beachfront => "Beachfront",
            Self::City => "City",
            Self::Mountain => "Mountain",
            Self::PrivateIsland => "Private Island",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown villa category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// A single rentable property. Never mutated once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinate,
    /// Nightly price, currency agnostic.
    pub price: u32,
    pub guests: u16,
    pub bedrooms: u8,
    #[serde(rename = "type")]
    pub category: Category,
    pub amenities: Vec<String>,
    pub activities: Vec<String>,
    pub image: String,
    pub description: String,
    pub provider: String,
    pub code: String,
}

impl Listing {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|tag| tag == amenity)
    }

    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|tag| tag == activity)
    }
}
