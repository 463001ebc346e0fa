use serde::{Deserialize, Serialize};
use std::fmt;

/// Region key used for listings whose location has no "City, Region" shape.
pub const OTHER_REGION: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Amazing pools")]
    AmazingPools,
    Cabins,
    Beachfront,
    Treehouses,
    Castles,
    Camping,
    City,
    Arctic,
    Desert,
}

impl Category {
    /// Display order of the category bar.
    pub const ALL: [Category; 9] = [
        Category::AmazingPools,
        Category::Cabins,
        Category::Beachfront,
        Category::Treehouses,
        Category::Castles,
        Category::Camping,
        Category::City,
        Category::Arctic,
        Category::Desert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::AmazingPools => "Amazing pools",
            Category::Cabins => "Cabins",
            Category::Beachfront => "Beachfront",
            Category::Treehouses => "Treehouses",
            Category::Castles => "Castles",
            Category::Camping => "Camping",
            Category::City => "City",
            Category::Arctic => "Arctic",
            Category::Desert => "Desert",
        }
    }

    /// Exact label match.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
}

/// A single rentable property record of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String, // "Entire home", "Private room", ...
    pub category: Category,
    pub location: String, // "City, Region"
    pub price_per_night: u32,
    pub rating: f32,
    pub review_count: u32,
    pub image_url: String,
    pub amenities: Vec<String>,
    pub host_name: String,
    pub coordinates: Coordinates,
    pub capacity: Capacity,
}

impl Listing {
    /// Text after the last comma of the location, trimmed.
    /// Falls back to [`OTHER_REGION`] when there is none.
    pub fn region(&self) -> &str {
        match self.location.rsplit_once(',') {
            Some((_, region)) if !region.trim().is_empty() => region.trim(),
            // No comma, or a trailing comma with nothing after it: no usable region.
            _ => OTHER_REGION,
        }
    }
}
