//! Catalog Store
//!
//! Read-only catalog data embedded at build time and decoded once on first
//! access, plus the filter/sort option metadata for the menu sidebar and
//! toolbar. A decode failure here is a packaging bug, not a runtime
//! condition, so first access panics rather than failing soft.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::{Category, DietaryTag, Product, Service, Testimonial};
use crate::menu::{CategoryFilter, SortOrder};

const MENU_DATA: &str = include_str!("data/menu.json");
const HOME_DATA: &str = include_str!("data/home.json");

#[derive(Debug, Deserialize)]
struct HomeData {
    products: Vec<Product>,
    services: Vec<Service>,
    testimonials: Vec<Testimonial>,
}

/// The full menu, in curated ("Chef recommends") order
pub fn menu_items() -> &'static [Product] {
    static ITEMS: OnceLock<Vec<Product>> = OnceLock::new();
    ITEMS.get_or_init(|| {
        serde_json::from_str(MENU_DATA).expect("embedded menu catalog is valid JSON")
    })
}

fn home_data() -> &'static HomeData {
    static DATA: OnceLock<HomeData> = OnceLock::new();
    DATA.get_or_init(|| {
        serde_json::from_str(HOME_DATA).expect("embedded home catalog is valid JSON")
    })
}

/// Featured dishes on the landing page
pub fn featured_products() -> &'static [Product] {
    &home_data().products
}

pub fn services() -> &'static [Service] {
    &home_data().services
}

pub fn testimonials() -> &'static [Testimonial] {
    &home_data().testimonials
}

/// A category lane in the menu sidebar
#[derive(Debug, Clone, Copy)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub helper: &'static str,
}

/// A dietary filter pill in the menu sidebar
#[derive(Debug, Clone, Copy)]
pub struct DietaryFilterOption {
    pub tag: DietaryTag,
    pub label: &'static str,
}

/// A sort choice in the menu toolbar
#[derive(Debug, Clone, Copy)]
pub struct SortOption {
    pub order: SortOrder,
    pub label: &'static str,
    pub helper: Option<&'static str>,
}

static MENU_CATEGORIES: [CategoryOption; 6] = [
    CategoryOption {
        filter: CategoryFilter::All,
        label: "All dishes",
        helper: "Browse the full experience curated by our kitchen team.",
    },
    CategoryOption {
        filter: CategoryFilter::Only(Category::Starters),
        label: "Starters",
        helper: "Seasonal small plates designed for sharing.",
    },
    CategoryOption {
        filter: CategoryFilter::Only(Category::Mains),
        label: "Mains",
        helper: "Comforting signatures and modern classics.",
    },
    CategoryOption {
        filter: CategoryFilter::Only(Category::Sides),
        label: "Sides",
        helper: "Vibrant accompaniments to round out the table.",
    },
    CategoryOption {
        filter: CategoryFilter::Only(Category::Desserts),
        label: "Desserts",
        helper: "Sweet finishes crafted in-house daily.",
    },
    CategoryOption {
        filter: CategoryFilter::Only(Category::Drinks),
        label: "Drinks",
        helper: "Refreshers, juices, and crafted mocktails.",
    },
];

static DIETARY_FILTERS: [DietaryFilterOption; 5] = [
    DietaryFilterOption {
        tag: DietaryTag::Vegan,
        label: "Plant-based",
    },
    DietaryFilterOption {
        tag: DietaryTag::GlutenFree,
        label: "Gluten friendly",
    },
    DietaryFilterOption {
        tag: DietaryTag::Hot,
        label: "Spicy",
    },
    DietaryFilterOption {
        tag: DietaryTag::Signature,
        label: "Chef signature",
    },
    DietaryFilterOption {
        tag: DietaryTag::Seasonal,
        label: "Seasonal pick",
    },
];

static SORT_OPTIONS: [SortOption; 5] = [
    SortOption {
        order: SortOrder::Recommended,
        label: "Chef recommends",
        helper: Some("Balanced tasting journey from light to bold."),
    },
    SortOption {
        order: SortOrder::PriceAsc,
        label: "Price · Low to high",
        helper: None,
    },
    SortOption {
        order: SortOrder::PriceDesc,
        label: "Price · High to low",
        helper: None,
    },
    SortOption {
        order: SortOrder::Rating,
        label: "Top rated",
        helper: None,
    },
    SortOption {
        order: SortOrder::Alphabetical,
        label: "A to Z",
        helper: None,
    },
];

/// Sidebar lanes; the "all" sentinel comes first and is the reset default.
pub fn menu_categories() -> &'static [CategoryOption] {
    &MENU_CATEGORIES
}

pub fn dietary_filters() -> &'static [DietaryFilterOption] {
    &DIETARY_FILTERS
}

pub fn sort_options() -> &'static [SortOption] {
    &SORT_OPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_catalog_decodes() {
        let items = menu_items();
        assert_eq!(items.len(), 13);
        assert!(items.iter().all(|i| i.category.is_some()));
        assert!(items.iter().all(|i| i.price >= 0.0));
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let items = menu_items();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_home_catalog_decodes() {
        assert_eq!(featured_products().len(), 6);
        assert_eq!(services().len(), 5);
        assert_eq!(testimonials().len(), 2);
    }

    #[test]
    fn test_sample_items_carry_expected_tags() {
        let risotto = menu_items()
            .iter()
            .find(|i| i.name == "Black Garlic Risotto")
            .unwrap();
        assert_eq!(risotto.category, Some(Category::Mains));
        assert!(risotto.has_tag(DietaryTag::Signature));

        let cod = menu_items()
            .iter()
            .find(|i| i.name == "Miso Glazed Cod")
            .unwrap();
        assert!(!cod.has_tag(DietaryTag::Signature));
    }

    #[test]
    fn test_option_metadata_shapes() {
        assert_eq!(menu_categories().len(), 6);
        assert_eq!(menu_categories()[0].filter, CategoryFilter::All);
        assert_eq!(dietary_filters().len(), 5);
        assert_eq!(sort_options().len(), 5);
        assert_eq!(sort_options()[0].order, SortOrder::Recommended);
    }
}
