use crate::config::ListingSettings;
use crate::listing::data::ListingData;
use crate::listing::options::{SelectOption, LIST_VIEW_TYPES, SORT_BY_ITEMS};
use crate::listing::sidebar::render_sidebar;
use crate::listing::state::ListingViewState;
use crate::listing::view::{
    BannerView, DescriptionView, GridView, ListingView, ProductCard, SelectView, ViewAction,
};
use crate::navigation::{Location, PageType};
use crate::query::{FilterState, SortKey};

/// Inputs to [`render_listing`] besides the data itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub page_type: PageType,
    pub page_name: &'a str,
    pub loading: bool,
    pub view_state: &'a ListingViewState,
    pub location: &'a Location,
    pub settings: &'a ListingSettings,
}

/// Build the listing tree. Pure: the same inputs always give the same view.
pub fn render_listing(data: &ListingData, ctx: &RenderContext<'_>) -> ListingView {
    let heading = data.heading();
    let filters = FilterState::from_params(&ctx.location.query);

    ListingView {
        banner: banner(data, heading, ctx.settings),
        breadcrumbs: data.breadcrumbs.clone(),
        description: description(data, ctx),
        title: format!("{} - {}", ctx.page_name, heading),
        count_line: count_line(data, ctx.settings),
        sort: select(SortKey::OrderBy, "Sort By", SORT_BY_ITEMS, filters.order_by.as_deref()),
        view: select(SortKey::List, "View By", LIST_VIEW_TYPES, filters.list.as_deref()),
        sidebar: render_sidebar(
            ctx.page_type,
            data.categories.as_deref(),
            ctx.location,
            ctx.view_state,
            ctx.settings,
        ),
        grid: grid(data, ctx),
    }
}

fn banner(data: &ListingData, heading: &str, settings: &ListingSettings) -> BannerView {
    let image_url = data
        .banner_image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(settings.placeholder_banner_url.as_str());
    // The heading is overlaid whenever the placeholder is what gets shown.
    let overlay_heading =
        (image_url == settings.placeholder_banner_url).then(|| heading.to_string());
    BannerView {
        image_url: image_url.to_string(),
        alt: heading.to_string(),
        overlay_heading,
    }
}

fn description(data: &ListingData, ctx: &RenderContext<'_>) -> DescriptionView {
    let text = data.description.as_deref().unwrap_or_default();
    let limit = ctx.settings.description_limit;

    if ctx.view_state.show_more || text.chars().count() <= limit {
        return DescriptionView {
            text: text.to_string(),
            show_more: None,
        };
    }

    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    DescriptionView {
        text: truncated,
        show_more: Some(ViewAction::ShowMore),
    }
}

fn count_line(data: &ListingData, settings: &ListingSettings) -> String {
    let shown = data
        .products
        .as_ref()
        .map(|products| products.len() as u64)
        .unwrap_or(settings.fallback_total);
    let total = data
        .categories
        .as_deref()
        .and_then(|categories| categories.first())
        .map(|category| category.count)
        .unwrap_or(settings.fallback_total);
    format!("{shown} of {total}")
}

fn select(
    key: SortKey,
    label: &'static str,
    options: &'static [SelectOption],
    current: Option<&str>,
) -> SelectView {
    let selected = current
        .and_then(|slug| options.iter().find(|option| option.slug == slug))
        .or_else(|| options.first())
        .map(|option| option.slug)
        .unwrap_or_default();
    SelectView {
        key,
        label,
        options,
        selected,
    }
}

fn grid(data: &ListingData, ctx: &RenderContext<'_>) -> GridView {
    let Some(products) = &data.products else {
        return GridView::Empty;
    };
    if ctx.loading {
        return GridView::Skeletons(ctx.settings.skeleton_count);
    }
    GridView::Cards(
        products
            .iter()
            .enumerate()
            .map(|(index, product)| ProductCard {
                key: format!("product-{index}"),
                index,
                product: product.clone(),
            })
            .collect(),
    )
}
