//! Listing view rendering rules.

mod common;

use common::{category, products};
use shelfview::config::ListingSettings;
use shelfview::listing::{
    render_listing, BreadcrumbSegment, GridView, ListingData, ListingView, ListingViewState,
    RenderContext, SidebarView, ViewAction,
};
use shelfview::navigation::Location;
use shelfview::query::{keys, FilterValue, PriceRange, SortKey};

struct Fixture {
    location: Location,
    settings: ListingSettings,
    view_state: ListingViewState,
    loading: bool,
}

impl Fixture {
    fn at(href: &str) -> Self {
        Self {
            location: Location::parse(href).unwrap(),
            settings: ListingSettings::default(),
            view_state: ListingViewState::default(),
            loading: false,
        }
    }

    fn render(&self, data: &ListingData) -> ListingView {
        render_listing(
            data,
            &RenderContext {
                page_type: self.location.route.page_type(),
                page_name: "Vitamins",
                loading: self.loading,
                view_state: &self.view_state,
                location: &self.location,
                settings: &self.settings,
            },
        )
    }
}

#[test]
fn long_description_truncates_until_show_more() {
    let text: String = "abcdefghij".repeat(45);
    let data = ListingData {
        description: Some(text.clone()),
        ..ListingData::default()
    };
    let mut fixture = Fixture::at("/products");

    let view = fixture.render(&data);
    assert_eq!(view.description.text.chars().count(), 403);
    assert!(view.description.text.ends_with("..."));
    assert_eq!(view.description.text[..400], text[..400]);
    assert_eq!(view.description.show_more, Some(ViewAction::ShowMore));

    fixture.view_state.show_more = true;
    let view = fixture.render(&data);
    assert_eq!(view.description.text, text);
    assert_eq!(view.description.show_more, None);
}

#[test]
fn description_at_limit_is_not_truncated() {
    let text = "é".repeat(400);
    let data = ListingData {
        description: Some(text.clone()),
        ..ListingData::default()
    };
    let view = Fixture::at("/products").render(&data);
    assert_eq!(view.description.text, text);
    assert!(!view.description.is_truncated());
}

#[test]
fn absent_products_render_nothing_even_while_loading() {
    let mut fixture = Fixture::at("/products");
    fixture.loading = true;

    let view = fixture.render(&ListingData::default());
    assert_eq!(view.grid, GridView::Empty);
    assert_eq!(view.grid.card_count(), 0);
    assert_eq!(view.grid.skeleton_count(), 0);
}

#[test]
fn loading_shows_eight_skeletons() {
    let mut fixture = Fixture::at("/products");
    fixture.loading = true;
    let data = ListingData {
        products: Some(products(3)),
        ..ListingData::default()
    };
    assert_eq!(fixture.render(&data).grid, GridView::Skeletons(8));
}

#[test]
fn cards_are_keyed_by_position() {
    let data = ListingData {
        products: Some(products(3)),
        ..ListingData::default()
    };
    let view = Fixture::at("/products").render(&data);
    let GridView::Cards(cards) = view.grid else {
        panic!("expected cards");
    };
    let keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["product-0", "product-1", "product-2"]);
    assert_eq!(cards[2].index, 2);
    assert_eq!(cards[2].product.title, "Item 2");
}

#[test]
fn count_line_falls_back_to_forty() {
    let fixture = Fixture::at("/products");
    let data = ListingData {
        products: Some(products(12)),
        ..ListingData::default()
    };
    assert_eq!(fixture.render(&data).count_line, "12 of 40");

    let data = ListingData {
        categories: Some(Vec::new()),
        ..data
    };
    assert_eq!(fixture.render(&data).count_line, "12 of 40");

    assert_eq!(
        fixture.render(&ListingData::default()).count_line,
        "40 of 40"
    );
}

#[test]
fn count_line_uses_first_category_count() {
    let data = ListingData {
        products: Some(products(2)),
        categories: Some(vec![category("Skin", "skin", 87), category("Hair", "hair", 3)]),
        ..ListingData::default()
    };
    assert_eq!(Fixture::at("/products").render(&data).count_line, "2 of 87");
}

#[test]
fn placeholder_banner_carries_the_heading() {
    let fixture = Fixture::at("/products");
    let view = fixture.render(&ListingData::default());
    assert_eq!(view.banner.image_url, fixture.settings.placeholder_banner_url);
    assert_eq!(view.banner.overlay_heading.as_deref(), Some("Products"));
    assert_eq!(view.title, "Vitamins - Products");

    let data = ListingData {
        heading: Some("Acme".to_string()),
        banner_image_url: Some("https://cdn.example.com/acme.jpg".to_string()),
        breadcrumbs: vec![BreadcrumbSegment::new("Home", "/")],
        ..ListingData::default()
    };
    let view = fixture.render(&data);
    assert_eq!(view.banner.image_url, "https://cdn.example.com/acme.jpg");
    assert_eq!(view.banner.overlay_heading, None);
    assert_eq!(view.title, "Vitamins - Acme");
    assert_eq!(view.breadcrumbs, data.breadcrumbs);
}

#[test]
fn placeholder_sent_by_the_catalog_still_gets_the_heading() {
    let fixture = Fixture::at("/products");
    let data = ListingData {
        heading: Some("Acme".to_string()),
        banner_image_url: Some(fixture.settings.placeholder_banner_url.clone()),
        ..ListingData::default()
    };
    let view = fixture.render(&data);
    assert_eq!(view.banner.image_url, fixture.settings.placeholder_banner_url);
    assert_eq!(view.banner.overlay_heading.as_deref(), Some("Acme"));
}

#[test]
fn selectors_default_to_first_option_and_follow_location() {
    let view = Fixture::at("/products").render(&ListingData::default());
    assert_eq!(view.sort.selected, "popularity");
    assert_eq!(view.view.selected, "grid");

    let view = Fixture::at("/products?order_by=newest&list=unknown").render(&ListingData::default());
    assert_eq!(view.sort.selected, "newest");
    assert_eq!(view.view.selected, "grid");
    assert_eq!(
        view.view.choose("list"),
        Some(ViewAction::SortChange {
            key: SortKey::List,
            value: "list".to_string()
        })
    );
}

#[test]
fn brand_sidebar_links_categories() {
    let data = ListingData {
        categories: Some(vec![category("Vitamins", "vitamins", 12), category("Skin", "skin", 4)]),
        ..ListingData::default()
    };
    let view = Fixture::at("/brand/acme/skin").render(&data);

    let SidebarView::Brand { title, links } = view.sidebar else {
        panic!("expected brand sidebar");
    };
    assert_eq!(title, "Category");
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].href, "/brand/acme/vitamins");
    assert_eq!(links[0].count, 12);
    assert!(!links[0].active);
    assert!(links[1].active);
    assert_eq!(
        links[1].on_click,
        ViewAction::CategoryItemClick {
            slug: "skin".to_string()
        }
    );
}

#[test]
fn brand_sidebar_without_categories_is_empty() {
    let view = Fixture::at("/brand/acme").render(&ListingData::default());
    assert!(matches!(&view.sidebar, SidebarView::Brand { links, .. } if links.is_empty()));
}

#[test]
fn category_sidebar_controls_mutate_query() {
    let view = Fixture::at("/category/skin?active=true&store_page=2").render(&ListingData::default());
    let SidebarView::Category(filters) = view.sidebar else {
        panic!("expected category sidebar");
    };

    assert!(filters.active.checked);
    assert_eq!(
        filters.active.on_toggle,
        ViewAction::SetFilters {
            updates: vec![(keys::ACTIVE.to_string(), Some(FilterValue::from(false)))]
        }
    );

    assert_eq!(filters.stores.page, 2);
    assert_eq!(
        filters.stores.previous,
        Some(ViewAction::SetFilters {
            updates: vec![(keys::STORE_PAGE.to_string(), Some(FilterValue::Number(1)))]
        })
    );
    assert_eq!(
        filters.stores.next,
        ViewAction::SetFilters {
            updates: vec![(keys::STORE_PAGE.to_string(), Some(FilterValue::Number(3)))]
        }
    );

    assert_eq!(filters.price.applied, PriceRange::default());
    assert_eq!(filters.price.max, 500);
    assert_eq!(filters.price.step, 100);
    assert!(!filters.price.is_dirty());
}

#[test]
fn price_draft_comes_from_view_state() {
    let mut fixture = Fixture::at("/category/skin?price_min=100&price_max=400");
    fixture.view_state.price_draft = Some(PriceRange { min: 200, max: 300 });

    let SidebarView::Category(filters) = fixture.render(&ListingData::default()).sidebar else {
        panic!("expected category sidebar");
    };
    assert_eq!(filters.price.applied, PriceRange { min: 100, max: 400 });
    assert_eq!(filters.price.draft, PriceRange { min: 200, max: 300 });
    assert!(filters.price.is_dirty());
}

#[test]
fn products_page_has_no_sidebar() {
    let view = Fixture::at("/products").render(&ListingData::default());
    assert_eq!(view.sidebar, SidebarView::Products);
}

#[test]
fn view_serializes_for_dump() {
    let data = ListingData {
        products: Some(products(1)),
        ..ListingData::default()
    };
    let json = serde_json::to_value(Fixture::at("/products").render(&data)).unwrap();
    assert_eq!(json["count_line"], "1 of 40");
    assert_eq!(json["grid"]["kind"], "cards");
    assert_eq!(json["grid"]["items"][0]["key"], "product-0");
    assert_eq!(json["sidebar"]["kind"], "products");
    assert_eq!(json["description"]["show_more"], serde_json::Value::Null);
}
