use serde::Serialize;

use crate::catalog::{Category, Product};

/// Heading used when the page supplies none.
pub const DEFAULT_HEADING: &str = "Products";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbSegment {
    pub title: String,
    pub href: String,
}

impl BreadcrumbSegment {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

/// Everything the listing view renders.
///
/// `products` and `categories` are `None` while nothing has been fetched;
/// `None` renders as "nothing", never as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingData {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub banner_image_url: Option<String>,
    pub breadcrumbs: Vec<BreadcrumbSegment>,
    pub products: Option<Vec<Product>>,
    pub categories: Option<Vec<Category>>,
}

impl ListingData {
    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(DEFAULT_HEADING)
    }
}
