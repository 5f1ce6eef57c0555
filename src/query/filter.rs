use std::fmt;

use serde::{Deserialize, Serialize};

use super::params::QueryParams;

/// Query keys the listing page understands.
pub mod keys {
    pub const ORDER_BY: &str = "order_by";
    pub const LIST: &str = "list";
    pub const CATEGORY_SLUG: &str = "category_slug";
    pub const ACTIVE: &str = "active";
    pub const PRICE_MIN: &str = "price_min";
    pub const PRICE_MAX: &str = "price_max";
    pub const STORE_PAGE: &str = "store_page";
}

pub const DEFAULT_PRICE_MAX: u32 = 500;
pub const DEFAULT_STORE_PAGE: u32 = 1;

/// A filter value before it is coerced to its query-string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(text) => f.write_str(text),
            FilterValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Number(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Text(if value { "true" } else { "false" }.to_string())
    }
}

/// One entry of a merge: `None` clears the key.
pub type FilterUpdate = (String, Option<FilterValue>);

/// Apply `updates` on top of `params`.
///
/// `None` deletes the key, `Some` sets it (coerced to a string). Keys not
/// named in `updates` are carried over untouched and in order.
pub fn merge_filters(params: &QueryParams, updates: &[FilterUpdate]) -> QueryParams {
    let mut merged = params.clone();
    for (key, value) in updates {
        match value {
            None => {
                merged.remove(key);
            }
            Some(value) => merged.set(key.clone(), value.to_string()),
        }
    }
    merged
}

/// The two dropdowns of the listing header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    OrderBy,
    List,
}

impl SortKey {
    pub fn query_key(self) -> &'static str {
        match self {
            SortKey::OrderBy => keys::ORDER_BY,
            SortKey::List => keys::LIST,
        }
    }
}

/// Inclusive price bounds in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

/// Typed view of the filter keys in a query, defaults applied.
///
/// Malformed values read as if the key were absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub order_by: Option<String>,
    pub list: Option<String>,
    pub category_slug: Option<String>,
    pub active: bool,
    pub price: PriceRange,
    pub store_page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            order_by: None,
            list: None,
            category_slug: None,
            active: true,
            price: PriceRange::default(),
            store_page: DEFAULT_STORE_PAGE,
        }
    }
}

impl FilterState {
    pub fn from_params(params: &QueryParams) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            params
                .get(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        let number = |key: &str| params.get(key).and_then(|value| value.parse::<u32>().ok());

        let active = match params.get(keys::ACTIVE) {
            Some("true") => true,
            Some("false") => false,
            _ => defaults.active,
        };

        let price = PriceRange {
            min: number(keys::PRICE_MIN).unwrap_or(defaults.price.min),
            max: number(keys::PRICE_MAX).unwrap_or(defaults.price.max),
        };
        let price = if price.min <= price.max {
            price
        } else {
            defaults.price
        };

        let store_page = number(keys::STORE_PAGE)
            .filter(|page| *page >= 1)
            .unwrap_or(defaults.store_page);

        Self {
            order_by: text(keys::ORDER_BY),
            list: text(keys::LIST),
            category_slug: text(keys::CATEGORY_SLUG),
            active,
            price,
            store_page,
        }
    }
}
