//! Per-route assembly of [`ListingData`] from a catalog response.

use crate::catalog::{Category, FilterType, ListingResponse};
use crate::listing::data::{BreadcrumbSegment, ListingData};
use crate::navigation::{Location, PageRoute};
use crate::query::QueryParams;

/// Filter groups in the order the products page consults them.
const FILTER_TYPE_PRIORITY: [FilterType; 3] = [
    FilterType::Categories,
    FilterType::Brands,
    FilterType::Collections,
];

/// The filter group that describes a products page for `query`.
pub fn filter_type_for(query: &QueryParams) -> FilterType {
    FILTER_TYPE_PRIORITY
        .into_iter()
        .find(|filter_type| query.contains(filter_type.query_key()))
        .unwrap_or(FilterType::Collections)
}

/// Name shown before the heading in the title line.
pub fn page_name(route: &PageRoute) -> String {
    match route {
        PageRoute::Products => "Products".to_string(),
        PageRoute::Brand { brand, .. } => brand.clone(),
        PageRoute::Category { slug } => slug.clone(),
    }
}

/// `response` is `None` until the first fetch lands.
pub fn listing_data(location: &Location, response: Option<&ListingResponse>) -> ListingData {
    match &location.route {
        PageRoute::Products => products_page(location, response),
        PageRoute::Brand { brand, category } => brand_page(brand, category.as_deref(), response),
        PageRoute::Category { slug } => category_page(slug, response),
    }
}

fn home() -> BreadcrumbSegment {
    BreadcrumbSegment::new("Home", "/")
}

fn products_page(location: &Location, response: Option<&ListingResponse>) -> ListingData {
    let filter_type = filter_type_for(&location.query);
    let entry = response.and_then(|r| r.data.filters.group(filter_type).first());

    ListingData {
        heading: None,
        description: entry.and_then(|e| e.short_description.clone()),
        banner_image_url: entry.and_then(|e| e.banner().map(str::to_string)),
        breadcrumbs: vec![home(), BreadcrumbSegment::new("Products", "/products")],
        products: response.and_then(|r| r.data.products.clone()),
        categories: None,
    }
}

fn brand_page(brand: &str, category: Option<&str>, response: Option<&ListingResponse>) -> ListingData {
    let filters = response.map(|r| &r.data.filters);
    let entry = filters.and_then(|f| f.brands.first());
    let categories = filters.map(|f| f.categories.clone());
    let title = entry
        .map(|e| e.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| brand.to_string());

    let mut breadcrumbs = vec![
        home(),
        BreadcrumbSegment::new("Brands", "/brands"),
        BreadcrumbSegment::new(title.clone(), format!("/brand/{brand}")),
    ];
    if let Some(slug) = category {
        let name = display_name(categories.as_deref().unwrap_or_default(), slug);
        breadcrumbs.push(BreadcrumbSegment::new(name, format!("/brand/{brand}/{slug}")));
    }

    ListingData {
        heading: Some(title),
        description: entry.and_then(|e| e.short_description.clone()),
        banner_image_url: entry.and_then(|e| e.banner().map(str::to_string)),
        breadcrumbs,
        products: response.and_then(|r| r.data.products.clone()),
        categories,
    }
}

fn category_page(slug: &str, response: Option<&ListingResponse>) -> ListingData {
    let categories = response.map(|r| r.data.filters.categories.as_slice()).unwrap_or_default();
    let entry = categories
        .iter()
        .find(|c| c.slug == slug)
        .or_else(|| categories.first());
    let title = display_name(categories, slug);

    ListingData {
        heading: Some(title.clone()),
        description: entry.and_then(|e| e.short_description.clone()),
        banner_image_url: entry.and_then(|e| e.banner().map(str::to_string)),
        breadcrumbs: vec![
            home(),
            BreadcrumbSegment::new("Categories", "/categories"),
            BreadcrumbSegment::new(title, format!("/category/{slug}")),
        ],
        products: response.and_then(|r| r.data.products.clone()),
        categories: (!categories.is_empty()).then(|| categories.to_vec()),
    }
}

/// The category's display name, or the slug when the response lacks it.
fn display_name(categories: &[Category], slug: &str) -> String {
    categories
        .iter()
        .find(|c| c.slug == slug && !c.name.is_empty())
        .map(|c| c.name.clone())
        .unwrap_or_else(|| slug.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_type_prefers_categories_then_brands() {
        let query = QueryParams::parse("collections=summer&brands=acme&categories=skin");
        assert_eq!(filter_type_for(&query), FilterType::Categories);

        let query = QueryParams::parse("collections=summer&brands=acme");
        assert_eq!(filter_type_for(&query), FilterType::Brands);

        assert_eq!(filter_type_for(&QueryParams::new()), FilterType::Collections);
    }

    #[test]
    fn page_names_follow_route() {
        assert_eq!(page_name(&PageRoute::Products), "Products");
        assert_eq!(
            page_name(&PageRoute::Brand {
                brand: "acme".to_string(),
                category: None
            }),
            "acme"
        );
    }

    #[test]
    fn empty_response_still_has_breadcrumbs() {
        let location = Location::parse("/category/skin-care").unwrap();
        let data = listing_data(&location, None);
        let titles: Vec<_> = data.breadcrumbs.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Home", "Categories", "skin-care"]);
        assert_eq!(data.products, None);
        assert_eq!(data.categories, None);
    }
}
