//! Static option lists for the sort and view dropdowns.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub slug: &'static str,
    pub label: &'static str,
}

const fn option(slug: &'static str, label: &'static str) -> SelectOption {
    SelectOption { slug, label }
}

pub const SORT_BY_ITEMS: &[SelectOption] = &[
    option("popularity", "Popularity"),
    option("price", "Price: Low to High"),
    option("price_desc", "Price: High to Low"),
    option("newest", "Newest"),
    option("discount", "Discount"),
];

pub const LIST_VIEW_TYPES: &[SelectOption] = &[option("grid", "Grid"), option("list", "List")];
