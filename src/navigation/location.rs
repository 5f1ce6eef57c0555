use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::query::{keys, QueryParams};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown listing path '{0}'")]
    UnknownPath(String),
}

/// Which listing page a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Brand,
    Category,
    Products,
}

/// Path part of a listing location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageRoute {
    /// `/products`
    Products,
    /// `/brand/{brand}` or `/brand/{brand}/{category}`
    Brand {
        brand: String,
        category: Option<String>,
    },
    /// `/category/{slug}`
    Category { slug: String },
}

impl PageRoute {
    pub fn parse(path: &str) -> Result<Self, NavigationError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["products"] => Ok(PageRoute::Products),
            ["brand", brand] => Ok(PageRoute::Brand {
                brand: (*brand).to_string(),
                category: None,
            }),
            ["brand", brand, category] => Ok(PageRoute::Brand {
                brand: (*brand).to_string(),
                category: Some((*category).to_string()),
            }),
            ["category", slug] => Ok(PageRoute::Category {
                slug: (*slug).to_string(),
            }),
            _ => Err(NavigationError::UnknownPath(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            PageRoute::Products => "/products".to_string(),
            PageRoute::Brand {
                brand,
                category: None,
            } => format!("/brand/{brand}"),
            PageRoute::Brand {
                brand,
                category: Some(category),
            } => format!("/brand/{brand}/{category}"),
            PageRoute::Category { slug } => format!("/category/{slug}"),
        }
    }

    pub fn page_type(&self) -> PageType {
        match self {
            PageRoute::Products => PageType::Products,
            PageRoute::Brand { .. } => PageType::Brand,
            PageRoute::Category { .. } => PageType::Category,
        }
    }

    /// Filters implied by the path itself.
    pub fn route_filters(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match self {
            PageRoute::Products => {}
            PageRoute::Brand { category, .. } => {
                if let Some(category) = category {
                    params.set(keys::CATEGORY_SLUG, category.clone());
                }
            }
            PageRoute::Category { slug } => params.set(keys::CATEGORY_SLUG, slug.clone()),
        }
        params
    }
}

/// Immutable snapshot of where the page is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub route: PageRoute,
    #[serde(serialize_with = "serialize_query")]
    pub query: QueryParams,
}

fn serialize_query<S: serde::Serializer>(query: &QueryParams, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&query.to_query_string())
}

impl Location {
    pub fn new(route: PageRoute, query: QueryParams) -> Self {
        Self { route, query }
    }

    /// Parse `"/path?query"`.
    pub fn parse(href: &str) -> Result<Self, NavigationError> {
        let (path, query) = match href.split_once('?') {
            Some((path, query)) => (path, query),
            None => (href, ""),
        };
        Ok(Self {
            route: PageRoute::parse(path)?,
            query: QueryParams::parse(query),
        })
    }

    pub fn href(&self) -> String {
        let path = self.route.path();
        if self.query.is_empty() {
            path
        } else {
            format!("{}?{}", path, self.query)
        }
    }

    pub fn with_query(&self, query: QueryParams) -> Self {
        Self {
            route: self.route.clone(),
            query,
        }
    }

    /// Filters the catalog is queried with: route-derived filters with the
    /// explicit query layered on top.
    pub fn fetch_filters(&self) -> QueryParams {
        self.query.layered_over(&self.route.route_filters())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Whether an effect adds a history entry or overwrites the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// A location change requested by the synchronizer or a sidebar control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEffect {
    pub location: Location,
    pub mode: HistoryMode,
}

impl NavigationEffect {
    pub fn push(location: Location) -> Self {
        Self {
            location,
            mode: HistoryMode::Push,
        }
    }

    pub fn replace(location: Location) -> Self {
        Self {
            location,
            mode: HistoryMode::Replace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    RouteChangeComplete(Location),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(PageRoute::parse("/products"), Ok(PageRoute::Products));
        assert_eq!(
            PageRoute::parse("/brand/cetaphil/"),
            Ok(PageRoute::Brand {
                brand: "cetaphil".to_string(),
                category: None
            })
        );
        assert_eq!(
            PageRoute::parse("/brand/cetaphil/skin-care"),
            Ok(PageRoute::Brand {
                brand: "cetaphil".to_string(),
                category: Some("skin-care".to_string())
            })
        );
        assert_eq!(
            PageRoute::parse("/category/vitamins"),
            Ok(PageRoute::Category {
                slug: "vitamins".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!(matches!(
            PageRoute::parse("/cart"),
            Err(NavigationError::UnknownPath(_))
        ));
    }

    #[test]
    fn href_round_trips() {
        let location = Location::parse("/brand/cetaphil/skin-care?order_by=price").unwrap();
        assert_eq!(location.href(), "/brand/cetaphil/skin-care?order_by=price");
        let bare = Location::parse("/products").unwrap();
        assert_eq!(bare.href(), "/products");
    }

    #[test]
    fn fetch_filters_include_route_category() {
        let location = Location::parse("/brand/cetaphil/skin-care?list=grid").unwrap();
        let filters = location.fetch_filters();
        assert_eq!(filters.get(keys::CATEGORY_SLUG), Some("skin-care"));
        assert_eq!(filters.get(keys::LIST), Some("grid"));
    }

    #[test]
    fn explicit_query_wins_over_route_filters() {
        let location = Location::parse("/category/vitamins?category_slug=minerals").unwrap();
        assert_eq!(
            location.fetch_filters().get(keys::CATEGORY_SLUG),
            Some("minerals")
        );
    }
}
