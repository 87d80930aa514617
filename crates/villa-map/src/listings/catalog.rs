use super::domain::{Category, Coordinate, Listing, ListingId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

struct SeedListing {
    id: u32,
    name: &'static str,
    location: &'static str,
    coordinates: (f64, f64),
    price: u32,
    guests: u16,
    bedrooms: u8,
    category: Category,
    amenities: &'static [&'static str],
    activities: &'static [&'static str],
    image: &'static str,
    description: &'static str,
    provider: &'static str,
    code: &'static str,
}

impl SeedListing {
    fn to_listing(&self) -> Listing {
        Listing {
            id: ListingId(self.id),
            name: self.name.to_string(),
            location: self.location.to_string(),
            coordinates: Coordinate::new(self.coordinates.0, self.coordinates.1),
            price: self.price,
            guests: self.guests,
            bedrooms: self.bedrooms,
            category: self.category,
            amenities: self.amenities.iter().map(|tag| tag.to_string()).collect(),
            activities: self.activities.iter().map(|tag| tag.to_string()).collect(),
            image: self.image.to_string(),
            description: self.description.to_string(),
            provider: self.provider.to_string(),
            code: self.code.to_string(),
        }
    }
}

const OCEAN_INFINITY_POOL: &str = "Villas/modern-villa-with-ocean-view-infinity-pool.jpg";
const OCEAN_SUNSET: &str = "Villas/modern-villa-with-ocean-view-sunset.jpg";
const POOL_OCEAN_VIEW: &str = "Villas/home-has-swimming-pool-view-ocean.jpg";
const MARKET_ESTATE: &str = "Villas/home-is-market-1-5-million.jpg";
const URBAN_POOL: &str = "Villas/modern-building-with-swimming-pool-trees-chairs-urban-landscape-with-blue-sky-reflecting-pool.jpg";
const MARKET_PERSON: &str = "Villas/home-person-is-market-1-5-million.jpg";

const SEED: [SeedListing; 15] = [
    // Tulum, México
    SeedListing {
        id: 1,
        name: "Tulum Beachfront Villa HOZ2015",
        location: "Tulum, México",
        coordinates: (-87.4653, 20.2114),
        price: 2500,
        guests: 14,
        bedrooms: 5,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "spa", "chef"],
        activities: &["diving", "spa"],
        image: OCEAN_INFINITY_POOL,
        description: "Luxury beachfront villa in Tulum's hotel zone with stunning ocean views",
        provider: "Sbx Travel",
        code: "HOZ2015",
    },
    SeedListing {
        id: 2,
        name: "Tulum Ocean Villa HOZ2039",
        location: "Tulum, México",
        coordinates: (-87.4643, 20.2104),
        price: 3200,
        guests: 18,
        bedrooms: 10,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "chef"],
        activities: &["diving", "spa"],
        image: OCEAN_SUNSET,
        description: "Spectacular beachfront villa perfect for large groups in Tulum",
        provider: "Sbx Travel",
        code: "HOZ2039",
    },
    SeedListing {
        id: 3,
        name: "Tulum Beach View Villa HOZ2040",
        location: "Tulum, México",
        coordinates: (-87.4633, 20.2094),
        price: 2000,
        guests: 12,
        bedrooms: 6,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "spa"],
        activities: &["diving"],
        image: POOL_OCEAN_VIEW,
        description: "Beautiful beach view villa with tropical garden in Tulum",
        provider: "Sbx Travel",
        code: "HOZ2040",
    },
    SeedListing {
        id: 4,
        name: "Tulum Luxury Estate HOZ2046",
        location: "Tulum, México",
        coordinates: (-87.4623, 20.2084),
        price: 4500,
        guests: 24,
        bedrooms: 12,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "spa", "chef", "gym"],
        activities: &["diving", "spa"],
        image: MARKET_ESTATE,
        description: "Ultimate luxury beachfront estate for exclusive gatherings",
        provider: "Sbx Travel",
        code: "HOZ2046",
    },
    SeedListing {
        id: 5,
        name: "Sian Ka'an Beachfront SIK3006",
        location: "Tulum, México",
        coordinates: (-87.4213, 20.1894),
        price: 2800,
        guests: 12,
        bedrooms: 5,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "chef"],
        activities: &["diving", "spa"],
        image: URBAN_POOL,
        description: "Secluded beachfront villa in pristine Sian Ka'an reserve",
        provider: "Sbx Travel",
        code: "SIK3006",
    },
    SeedListing {
        id: 6,
        name: "Aldea Zama Luxury Villa AZA1084",
        location: "Tulum, México",
        coordinates: (-87.4293, 20.2014),
        price: 3500,
        guests: 20,
        bedrooms: 10,
        category: Category::City,
        amenities: &["infinity-pool", "spa", "gym"],
        activities: &["spa", "shopping"],
        image: MARKET_PERSON,
        description: "Modern luxury villa in exclusive Aldea Zama community",
        provider: "Sbx Travel",
        code: "AZA1084",
    },
    // Ibiza, Spain
    SeedListing {
        id: 7,
        name: "Villa Armonía",
        location: "Sant Josep, Ibiza",
        coordinates: (1.3366, 38.9653),
        price: 4200,
        guests: 10,
        bedrooms: 5,
        category: Category::Mountain,
        amenities: &["infinity-pool", "spa", "chef"],
        activities: &["nightlife", "shopping"],
        image: OCEAN_INFINITY_POOL,
        description: "Elegant villa with breathtaking views in Sant Josep",
        provider: "VIP Soul",
        code: "Armonía",
    },
    SeedListing {
        id: 8,
        name: "Villa Azahara",
        location: "Sant Josep, Ibiza",
        coordinates: (1.3356, 38.9643),
        price: 5500,
        guests: 12,
        bedrooms: 6,
        category: Category::Mountain,
        amenities: &["infinity-pool", "spa", "chef", "gym"],
        activities: &["nightlife", "shopping"],
        image: OCEAN_SUNSET,
        description: "Luxury villa with panoramic sea views and modern amenities",
        provider: "VIP Soul",
        code: "Azahara",
    },
    SeedListing {
        id: 9,
        name: "Exclusive Estate",
        location: "Ibiza, Spain",
        coordinates: (1.4823, 38.9067),
        price: 8500,
        guests: 15,
        bedrooms: 6,
        category: Category::PrivateIsland,
        amenities: &["infinity-pool", "spa", "chef", "helipad"],
        activities: &["nightlife", "shopping"],
        image: POOL_OCEAN_VIEW,
        description: "Ultra-exclusive estate with unparalleled luxury and privacy",
        provider: "VIP Soul",
        code: "Exclusive Estate",
    },
    SeedListing {
        id: 10,
        name: "Can Flowers",
        location: "Santa Eulalia, Ibiza",
        coordinates: (1.5320, 38.9845),
        price: 6200,
        guests: 13,
        bedrooms: 7,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "chef"],
        activities: &["diving", "nightlife"],
        image: MARKET_ESTATE,
        description: "Charming villa with beautiful gardens near Santa Eulalia",
        provider: "VIP Soul",
        code: "Can Flowers",
    },
    SeedListing {
        id: 11,
        name: "Villa Talamanca",
        location: "Talamanca, Ibiza",
        coordinates: (1.4423, 38.9267),
        price: 3800,
        guests: 8,
        bedrooms: 4,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "spa"],
        activities: &["diving", "nightlife"],
        image: URBAN_POOL,
        description: "Stylish villa steps away from Talamanca beach",
        provider: "VIP Soul",
        code: "Villa Talamanca",
    },
    SeedListing {
        id: 12,
        name: "Marina Luxury Apartment",
        location: "Marina de Botafoch, Ibiza",
        coordinates: (1.4523, 38.9167),
        price: 2200,
        guests: 6,
        bedrooms: 3,
        category: Category::City,
        amenities: &["spa", "gym"],
        activities: &["nightlife", "shopping"],
        image: MARKET_PERSON,
        description: "Sophisticated apartment in prestigious Marina de Botafoch",
        provider: "VIP Soul",
        code: "Paul Apartment",
    },
    // Lisboa, Portugal
    SeedListing {
        id: 13,
        name: "Aroeira Mansion",
        location: "Aroeira, Lisboa",
        coordinates: (-9.2319, 38.5755),
        price: 3200,
        guests: 10,
        bedrooms: 4,
        category: Category::Mountain,
        amenities: &["infinity-pool", "spa", "gym"],
        activities: &["golf", "spa"],
        image: OCEAN_INFINITY_POOL,
        description: "Magnificent mansion in exclusive Aroeira resort community",
        provider: "Vhils",
        code: "Aroeira Mansion",
    },
    SeedListing {
        id: 14,
        name: "Green Cabin",
        location: "Costa da Caparica, Lisboa",
        coordinates: (-9.2419, 38.5655),
        price: 1200,
        guests: 4,
        bedrooms: 2,
        category: Category::Beachfront,
        amenities: &["spa"],
        activities: &["diving", "spa"],
        image: OCEAN_SUNSET,
        description: "Charming beachfront cabin with direct beach access",
        provider: "Vhils",
        code: "Green Cabin",
    },
    SeedListing {
        id: 15,
        name: "Melides Art Villa",
        location: "Melides, Lisboa",
        coordinates: (-8.7846, 38.1398),
        price: 2800,
        guests: 8,
        bedrooms: 4,
        category: Category::Beachfront,
        amenities: &["infinity-pool", "spa"],
        activities: &["diving", "spa"],
        image: POOL_OCEAN_VIEW,
        description: "Artistic villa with contemporary design near pristine beaches",
        provider: "Vhils",
        code: "Melides Art",
    },
];

/// The built-in villa catalog, in display order.
pub fn load_catalog() -> Vec<Listing> {
    SEED.iter().map(SeedListing::to_listing).collect()
}

/// Uses the CSV file at `path` when one is configured, the built-in catalog otherwise.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Vec<Listing>, CatalogError> {
    match path {
        Some(path) => CatalogLoader::from_path(path),
        None => Ok(load_catalog()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
    #[error("catalog row {row}: invalid {field}: {reason}")]
    InvalidValue {
        row: usize,
        field: &'static str,
        reason: String,
    },
    #[error("catalog contains duplicate listing id {0}")]
    DuplicateId(ListingId),
    #[error("catalog contains no listings")]
    Empty,
}

/// Reads and writes the CSV catalog format. Tag columns are `|`-separated.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut listings = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let listing = record?.into_listing(index + 1)?;
            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId(listing.id));
            }
            listings.push(listing);
        }

        if listings.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(listings)
    }

    pub fn write_csv<W: Write>(listings: &[Listing], writer: W) -> Result<(), CatalogError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for listing in listings {
            csv_writer.serialize(CatalogRow::from(listing))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogRow {
    id: u32,
    name: String,
    location: String,
    longitude: f64,
    latitude: f64,
    price: u32,
    guests: u16,
    bedrooms: u8,
    #[serde(rename = "type")]
    category: String,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    amenities: String,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    activities: String,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    image: String,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    provider: String,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    code: String,
}

impl CatalogRow {
    fn into_listing(self, row: usize) -> Result<Listing, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::MissingField { row, field: "name" });
        }
        if self.location.trim().is_empty() {
            return Err(CatalogError::MissingField {
                row,
                field: "location",
            });
        }
        if self.price == 0 {
            return Err(CatalogError::InvalidValue {
                row,
                field: "price",
                reason: "nightly price must be positive".to_string(),
            });
        }
        if self.guests == 0 {
            return Err(CatalogError::InvalidValue {
                row,
                field: "guests",
                reason: "guest capacity must be positive".to_string(),
            });
        }

        let coordinates = Coordinate::new(self.longitude, self.latitude);
        if !coordinates.is_valid() {
            return Err(CatalogError::InvalidValue {
                row,
                field: "coordinates",
                reason: format!("({}, {}) is not a longitude/latitude pair", self.longitude, self.latitude),
            });
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|err| CatalogError::InvalidValue {
                row,
                field: "type",
                reason: err.to_string(),
            })?;

        Ok(Listing {
            id: ListingId(self.id),
            name: self.name,
            location: self.location,
            coordinates,
            price: self.price,
            guests: self.guests,
            bedrooms: self.bedrooms,
            category,
            amenities: split_tags(&self.amenities),
            activities: split_tags(&self.activities),
            image: self.image,
            description: self.description,
            provider: self.provider,
            code: self.code,
        })
    }
}

impl From<&Listing> for CatalogRow {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.0,
            name: listing.name.clone(),
            location: listing.location.clone(),
            longitude: listing.coordinates.lng,
            latitude: listing.coordinates.lat,
            price: listing.price,
            guests: listing.guests,
            bedrooms: listing.bedrooms,
            category: listing.category.as_str().to_string(),
            amenities: listing.amenities.join("|"),
            activities: listing.activities.join("|"),
            image: listing.image.clone(),
            description: listing.description.clone(),
            provider: listing.provider.clone(),
            code: listing.code.clone(),
        }
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

fn empty_string_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
