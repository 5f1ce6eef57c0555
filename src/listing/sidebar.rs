use crate::catalog::Category;
use crate::config::ListingSettings;
use crate::listing::state::ListingViewState;
use crate::listing::view::{
    CategoryFilters, CategoryLink, PriceRangeView, SidebarView, StorePagerView, ToggleView,
    ViewAction,
};
use crate::navigation::{Location, PageRoute, PageType};
use crate::query::{keys, FilterState, FilterValue, PriceRange};

pub(super) fn render_sidebar(
    page_type: PageType,
    categories: Option<&[Category]>,
    location: &Location,
    view_state: &ListingViewState,
    settings: &ListingSettings,
) -> SidebarView {
    match page_type {
        PageType::Brand => brand_sidebar(categories.unwrap_or_default(), location),
        PageType::Category => SidebarView::Category(category_filters(location, view_state, settings)),
        PageType::Products => SidebarView::Products,
    }
}

fn brand_sidebar(categories: &[Category], location: &Location) -> SidebarView {
    let (brand, active) = match &location.route {
        PageRoute::Brand { brand, category } => (brand.as_str(), category.as_deref()),
        _ => ("", None),
    };
    let links = categories
        .iter()
        .map(|category| CategoryLink {
            name: category.name.clone(),
            slug: category.slug.clone(),
            href: format!("/brand/{}/{}", brand, category.slug),
            count: category.count,
            active: active == Some(category.slug.as_str()),
            on_click: ViewAction::CategoryItemClick {
                slug: category.slug.clone(),
            },
        })
        .collect();
    SidebarView::Brand {
        title: "Category",
        links,
    }
}

fn category_filters(
    location: &Location,
    view_state: &ListingViewState,
    settings: &ListingSettings,
) -> CategoryFilters {
    let filters = FilterState::from_params(&location.query);

    let active = ToggleView {
        label: "Active stores",
        description: "Only show products from stores that are connected to Stripe",
        checked: filters.active,
        on_toggle: ViewAction::SetFilters {
            updates: vec![(keys::ACTIVE.to_string(), Some(FilterValue::from(!filters.active)))],
        },
    };

    let applied = clamp_range(filters.price, settings.price_max);
    let price = PriceRangeView {
        title: "Price range ($)",
        max: settings.price_max,
        step: settings.price_step,
        draft: view_state
            .price_draft
            .map(|draft| clamp_range(draft, settings.price_max))
            .unwrap_or(applied),
        applied,
    };

    let page = filters.store_page;
    let store_page = |page: u32| ViewAction::SetFilters {
        updates: vec![(keys::STORE_PAGE.to_string(), Some(FilterValue::from(page)))],
    };
    let stores = StorePagerView {
        page,
        previous: (page > 1).then(|| store_page(page - 1)),
        next: store_page(page.saturating_add(1)),
    };

    CategoryFilters {
        active,
        price,
        stores,
    }
}

fn clamp_range(range: PriceRange, max: u32) -> PriceRange {
    let upper = range.max.min(max);
    PriceRange {
        min: range.min.min(upper),
        max: upper,
    }
}
