use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A product card's record.
///
/// Only the fields a card shows are typed; everything else rides along in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A category, brand or collection entry from the listing filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
    #[serde(default)]
    pub images: Option<ImageSet>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn banner(&self) -> Option<&str> {
        self.images.as_ref().and_then(|images| images.banner.as_deref())
    }
}

/// Counts arrive as numbers or numeric strings; anything else reads as 0.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_u64().unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Which filter group of a listing response describes the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Categories,
    Brands,
    Collections,
}

impl FilterType {
    pub fn query_key(self) -> &'static str {
        match self {
            FilterType::Categories => "categories",
            FilterType::Brands => "brands",
            FilterType::Collections => "collections",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub brands: Vec<Category>,
    #[serde(default)]
    pub collections: Vec<Category>,
}

impl ListingFilters {
    pub fn group(&self, filter_type: FilterType) -> &[Category] {
        match filter_type {
            FilterType::Categories => &self.categories,
            FilterType::Brands => &self.brands,
            FilterType::Collections => &self.collections,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPayload {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub filters: ListingFilters,
}

/// Envelope returned by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: ListingPayload,
}
