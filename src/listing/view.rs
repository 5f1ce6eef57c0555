//! The rendered listing tree.
//!
//! Everything here is plain data. Interactive nodes carry the
//! [`ViewAction`] they emit; the host decides how to present and trigger
//! them.

use serde::Serialize;

use crate::catalog::Product;
use crate::listing::data::BreadcrumbSegment;
use crate::listing::options::SelectOption;
use crate::query::{keys, FilterUpdate, FilterValue, PriceRange, SortKey};

/// What a user interaction asks for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ViewAction {
    ShowMore,
    SortChange { key: SortKey, value: String },
    CategoryItemClick { slug: String },
    /// Mutate the location query directly, bypassing the debounced fetch path.
    SetFilters { updates: Vec<FilterUpdate> },
    SetPriceDraft { range: PriceRange },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub banner: BannerView,
    pub breadcrumbs: Vec<BreadcrumbSegment>,
    pub description: DescriptionView,
    pub title: String,
    pub count_line: String,
    pub sort: SelectView,
    pub view: SelectView,
    pub sidebar: SidebarView,
    pub grid: GridView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerView {
    pub image_url: String,
    pub alt: String,
    /// Heading drawn over the image; only set for the placeholder banner.
    pub overlay_heading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionView {
    pub text: String,
    pub show_more: Option<ViewAction>,
}

impl DescriptionView {
    pub fn is_truncated(&self) -> bool {
        self.show_more.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub key: SortKey,
    pub label: &'static str,
    pub options: &'static [SelectOption],
    pub selected: &'static str,
}

impl SelectView {
    pub fn selected_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| option.slug == self.selected)
            .unwrap_or(0)
    }

    pub fn selected_label(&self) -> &'static str {
        self.options
            .get(self.selected_index())
            .map(|option| option.label)
            .unwrap_or_default()
    }

    /// The action for picking `slug`, if it is one of the options.
    pub fn choose(&self, slug: &str) -> Option<ViewAction> {
        self.options
            .iter()
            .find(|option| option.slug == slug)
            .map(|option| ViewAction::SortChange {
                key: self.key,
                value: option.slug.to_string(),
            })
    }

    /// The action for stepping `offset` entries from the current one, wrapping.
    pub fn cycle(&self, offset: isize) -> Option<ViewAction> {
        let len = self.options.len() as isize;
        if len == 0 {
            return None;
        }
        let next = (self.selected_index() as isize + offset).rem_euclid(len) as usize;
        self.choose(self.options[next].slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SidebarView {
    Brand {
        title: &'static str,
        links: Vec<CategoryLink>,
    },
    Category(CategoryFilters),
    Products,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLink {
    pub name: String,
    pub slug: String,
    pub href: String,
    pub count: u64,
    pub active: bool,
    pub on_click: ViewAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFilters {
    pub active: ToggleView,
    pub price: PriceRangeView,
    pub stores: StorePagerView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleView {
    pub label: &'static str,
    pub description: &'static str,
    pub checked: bool,
    pub on_toggle: ViewAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRangeView {
    pub title: &'static str,
    pub max: u32,
    pub step: u32,
    /// What the slider shows; equals `applied` until the user moves it.
    pub draft: PriceRange,
    pub applied: PriceRange,
}

impl PriceRangeView {
    pub fn is_dirty(&self) -> bool {
        self.draft != self.applied
    }

    /// Move the lower handle by `steps`, clamped to `0..=draft.max`.
    pub fn nudge_min(&self, steps: i64) -> ViewAction {
        let min = self.offset(self.draft.min, steps).min(self.draft.max);
        ViewAction::SetPriceDraft {
            range: PriceRange {
                min,
                max: self.draft.max,
            },
        }
    }

    /// Move the upper handle by `steps`, clamped to `draft.min..=max`.
    pub fn nudge_max(&self, steps: i64) -> ViewAction {
        let max = self.offset(self.draft.max, steps).max(self.draft.min);
        ViewAction::SetPriceDraft {
            range: PriceRange {
                min: self.draft.min,
                max,
            },
        }
    }

    /// Commit the draft to the query. The full range clears both keys.
    pub fn apply(&self) -> ViewAction {
        let full = self.draft.min == 0 && self.draft.max == self.max;
        let value = |bound: u32| (!full).then(|| FilterValue::from(bound));
        ViewAction::SetFilters {
            updates: vec![
                (keys::PRICE_MIN.to_string(), value(self.draft.min)),
                (keys::PRICE_MAX.to_string(), value(self.draft.max)),
            ],
        }
    }

    fn offset(&self, value: u32, steps: i64) -> u32 {
        let moved = i64::from(value) + steps * i64::from(self.step);
        moved.clamp(0, i64::from(self.max)) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorePagerView {
    pub page: u32,
    /// `None` on the first page.
    pub previous: Option<ViewAction>,
    pub next: ViewAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum GridView {
    Empty,
    Skeletons(usize),
    Cards(Vec<ProductCard>),
}

impl GridView {
    pub fn card_count(&self) -> usize {
        match self {
            GridView::Cards(cards) => cards.len(),
            _ => 0,
        }
    }

    pub fn skeleton_count(&self) -> usize {
        match self {
            GridView::Skeletons(count) => *count,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub key: String,
    pub index: usize,
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::options::SORT_BY_ITEMS;

    fn price_view(draft: PriceRange) -> PriceRangeView {
        PriceRangeView {
            title: "Price range ($)",
            max: 500,
            step: 100,
            draft,
            applied: PriceRange::default(),
        }
    }

    #[test]
    fn choose_rejects_unknown_slug() {
        let select = SelectView {
            key: SortKey::OrderBy,
            label: "Sort By",
            options: SORT_BY_ITEMS,
            selected: SORT_BY_ITEMS[0].slug,
        };
        assert_eq!(select.choose("bogus"), None);
        assert_eq!(
            select.choose("price"),
            Some(ViewAction::SortChange {
                key: SortKey::OrderBy,
                value: "price".to_string()
            })
        );
    }

    #[test]
    fn cycle_wraps_around() {
        let select = SelectView {
            key: SortKey::OrderBy,
            label: "Sort By",
            options: SORT_BY_ITEMS,
            selected: SORT_BY_ITEMS[0].slug,
        };
        let last = SORT_BY_ITEMS[SORT_BY_ITEMS.len() - 1].slug;
        assert_eq!(
            select.cycle(-1),
            Some(ViewAction::SortChange {
                key: SortKey::OrderBy,
                value: last.to_string()
            })
        );
    }

    #[test]
    fn nudges_clamp_to_bounds_and_each_other() {
        let view = price_view(PriceRange { min: 100, max: 200 });
        assert_eq!(
            view.nudge_min(5),
            ViewAction::SetPriceDraft {
                range: PriceRange { min: 200, max: 200 }
            }
        );
        assert_eq!(
            view.nudge_max(10),
            ViewAction::SetPriceDraft {
                range: PriceRange { min: 100, max: 500 }
            }
        );
        assert_eq!(
            view.nudge_min(-3),
            ViewAction::SetPriceDraft {
                range: PriceRange { min: 0, max: 200 }
            }
        );
    }

    #[test]
    fn applying_full_range_clears_price_keys() {
        let view = price_view(PriceRange { min: 0, max: 500 });
        assert_eq!(
            view.apply(),
            ViewAction::SetFilters {
                updates: vec![
                    (keys::PRICE_MIN.to_string(), None),
                    (keys::PRICE_MAX.to_string(), None),
                ]
            }
        );

        let view = price_view(PriceRange { min: 100, max: 300 });
        assert_eq!(
            view.apply(),
            ViewAction::SetFilters {
                updates: vec![
                    (keys::PRICE_MIN.to_string(), Some(FilterValue::Number(100))),
                    (keys::PRICE_MAX.to_string(), Some(FilterValue::Number(300))),
                ]
            }
        );
    }
}
