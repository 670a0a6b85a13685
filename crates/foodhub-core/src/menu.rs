//! Menu View State
//!
//! Filter/sort/search selection for the menu browser, plus the pure
//! computation of the visible item list. Never persisted; recomputing the
//! visible list from the catalog and this state is side-effect free.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::domain::{Category, DietaryTag, Product};

/// Category selection, with "all" as the sentinel lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn from_id(id: &str) -> Self {
        match id {
            "starters" => CategoryFilter::Only(Category::Starters),
            "mains" => CategoryFilter::Only(Category::Mains),
            "sides" => CategoryFilter::Only(Category::Sides),
            "desserts" => CategoryFilter::Only(Category::Desserts),
            "drinks" => CategoryFilter::Only(Category::Drinks),
            _ => CategoryFilter::All,
        }
    }

    fn matches(&self, category: Option<Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(*wanted),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Original,
    Price,
    Rating,
    Name,
}

/// Sort selection for the menu grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog input order ("Chef recommends")
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    /// Rating, highest first; missing ratings sort as 0
    Rating,
    /// Name A-Z, case-insensitive
    Alphabetical,
}

impl SortOrder {
    pub fn id(&self) -> &'static str {
        match self {
            SortOrder::Recommended => "recommended",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Rating => "rating",
            SortOrder::Alphabetical => "alphabetical",
        }
    }

    pub fn from_id(id: &str) -> Self {
        match id {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            "rating" => SortOrder::Rating,
            "alphabetical" => SortOrder::Alphabetical,
            _ => SortOrder::Recommended,
        }
    }

    fn key(&self) -> SortKey {
        match self {
            SortOrder::Recommended => SortKey::Original,
            SortOrder::PriceAsc | SortOrder::PriceDesc => SortKey::Price,
            SortOrder::Rating => SortKey::Rating,
            SortOrder::Alphabetical => SortKey::Name,
        }
    }

    fn ascending(&self) -> bool {
        !matches!(self, SortOrder::PriceDesc | SortOrder::Rating)
    }
}

/// User-selected category/tags/sort/search for the menu page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuViewState {
    active_category: CategoryFilter,
    active_tags: BTreeSet<DietaryTag>,
    active_sort: SortOrder,
    query: String,
}

impl MenuViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    pub fn active_tags(&self) -> &BTreeSet<DietaryTag> {
        &self.active_tags
    }

    pub fn is_tag_active(&self, tag: DietaryTag) -> bool {
        self.active_tags.contains(&tag)
    }

    pub fn active_sort(&self) -> SortOrder {
        self.active_sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.active_category = filter;
    }

    pub fn toggle_tag(&mut self, tag: DietaryTag) {
        if !self.active_tags.remove(&tag) {
            self.active_tags.insert(tag);
        }
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.active_sort = sort;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Back to the first category, empty tag set, default sort, empty query.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Category must match (unless All), every active tag must be present,
    /// and the query (if any) must appear in the name or description.
    pub fn matches(&self, item: &Product) -> bool {
        if !self.active_category.matches(item.category) {
            return false;
        }

        if !self.active_tags.iter().all(|tag| item.has_tag(*tag)) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        item.name.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query)
    }

    /// Pure computation of the filtered, sorted display list.
    ///
    /// The sort is stable and a descending direction reverses the comparator
    /// result rather than the final list, so equal keys keep their relative
    /// catalog order.
    pub fn visible_items(&self, items: &[Product]) -> Vec<Product> {
        let mut visible: Vec<Product> = items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();

        let key = self.active_sort.key();
        if key != SortKey::Original {
            let ascending = self.active_sort.ascending();
            visible.sort_by(|a, b| {
                let ord = match key {
                    SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
                    SortKey::Rating => a
                        .rating_or_default()
                        .partial_cmp(&b.rating_or_default())
                        .unwrap_or(Ordering::Equal),
                    SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                    SortKey::Original => Ordering::Equal,
                };
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn dish(id: &str, name: &str, price: f64, category: Category, tags: &[DietaryTag]) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: String::new(),
            image: format!("/images/{id}.jpg"),
            category: Some(category),
            tags: tags.to_vec(),
            rating: None,
            calories: None,
            prep_time: None,
            highlight: None,
        }
    }

    #[test]
    fn test_default_state_shows_everything_in_catalog_order() {
        let state = MenuViewState::new();
        let items = catalog::menu_items();
        let visible = state.visible_items(items);

        assert_eq!(visible.len(), items.len());
        let ids: Vec<_> = visible.iter().map(|i| i.id.as_str()).collect();
        let expected: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_category_and_tag_filter_are_anded() {
        let mut state = MenuViewState::new();
        state.set_category(CategoryFilter::Only(Category::Mains));
        state.toggle_tag(DietaryTag::Signature);

        let names: Vec<_> = state
            .visible_items(catalog::menu_items())
            .into_iter()
            .map(|i| i.name)
            .collect();

        // Mains carrying the signature tag; Miso Glazed Cod is mains but
        // not signature and must be excluded.
        assert_eq!(names, ["Black Garlic Risotto", "Saffron Gnocchi"]);
    }

    #[test]
    fn test_multiple_tags_require_every_tag() {
        let mut state = MenuViewState::new();
        state.toggle_tag(DietaryTag::Vegan);
        state.toggle_tag(DietaryTag::Seasonal);

        let visible = state.visible_items(catalog::menu_items());
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|i| i.has_tag(DietaryTag::Vegan) && i.has_tag(DietaryTag::Seasonal)));
    }

    #[test]
    fn test_toggle_tag_twice_clears_it() {
        let mut state = MenuViewState::new();
        state.toggle_tag(DietaryTag::Hot);
        assert!(state.is_tag_active(DietaryTag::Hot));
        state.toggle_tag(DietaryTag::Hot);
        assert!(!state.is_tag_active(DietaryTag::Hot));
    }

    #[test]
    fn test_price_sort_both_directions() {
        let items = vec![
            dish("a", "A", 9.0, Category::Sides, &[]),
            dish("b", "B", 24.0, Category::Mains, &[]),
            dish("c", "C", 18.0, Category::Mains, &[]),
        ];

        let mut state = MenuViewState::new();
        state.set_sort(SortOrder::PriceAsc);
        let prices: Vec<_> = state.visible_items(&items).iter().map(|i| i.price).collect();
        assert_eq!(prices, [9.0, 18.0, 24.0]);

        state.set_sort(SortOrder::PriceDesc);
        let prices: Vec<_> = state.visible_items(&items).iter().map(|i| i.price).collect();
        assert_eq!(prices, [24.0, 18.0, 9.0]);
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let items = vec![
            dish("first", "First", 12.0, Category::Mains, &[]),
            dish("cheap", "Cheap", 7.0, Category::Mains, &[]),
            dish("second", "Second", 12.0, Category::Mains, &[]),
        ];

        let mut state = MenuViewState::new();
        state.set_sort(SortOrder::PriceAsc);
        let ids: Vec<_> = state
            .visible_items(&items)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["cheap", "first", "second"]);

        // Descending reverses the comparator, not the list: ties still
        // keep their original relative order.
        state.set_sort(SortOrder::PriceDesc);
        let ids: Vec<_> = state
            .visible_items(&items)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["first", "second", "cheap"]);
    }

    #[test]
    fn test_rating_sort_treats_missing_as_zero() {
        let mut unrated = dish("unrated", "Unrated", 10.0, Category::Drinks, &[]);
        unrated.rating = None;
        let mut top = dish("top", "Top", 10.0, Category::Drinks, &[]);
        top.rating = Some(4.9);

        let items = vec![unrated, top];
        let mut state = MenuViewState::new();
        state.set_sort(SortOrder::Rating);

        let ids: Vec<_> = state
            .visible_items(&items)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["top", "unrated"]);
    }

    #[test]
    fn test_alphabetical_sort_is_case_insensitive() {
        let items = vec![
            dish("b", "banana bread", 5.0, Category::Desserts, &[]),
            dish("a", "Apple Tart", 6.0, Category::Desserts, &[]),
        ];

        let mut state = MenuViewState::new();
        state.set_sort(SortOrder::Alphabetical);
        let ids: Vec<_> = state
            .visible_items(&items)
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_query_narrows_and_clears() {
        let mut state = MenuViewState::new();
        state.set_query("risotto");

        let names: Vec<_> = state
            .visible_items(catalog::menu_items())
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["Black Garlic Risotto"]);

        state.set_query("");
        assert_eq!(
            state.visible_items(catalog::menu_items()).len(),
            catalog::menu_items().len()
        );
    }

    #[test]
    fn test_empty_result_set_is_valid() {
        let mut state = MenuViewState::new();
        state.set_category(CategoryFilter::Only(Category::Drinks));
        state.toggle_tag(DietaryTag::GlutenFree);
        state.toggle_tag(DietaryTag::Vegan);

        assert!(state.visible_items(catalog::menu_items()).is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = MenuViewState::new();
        state.set_category(CategoryFilter::Only(Category::Desserts));
        state.toggle_tag(DietaryTag::Signature);
        state.set_sort(SortOrder::PriceDesc);
        state.set_query("chocolate");

        state.reset();

        assert_eq!(state.active_category(), CategoryFilter::All);
        assert!(state.active_tags().is_empty());
        assert_eq!(state.active_sort(), SortOrder::Recommended);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_sort_ids_round_trip() {
        for sort in [
            SortOrder::Recommended,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
            SortOrder::Rating,
            SortOrder::Alphabetical,
        ] {
            assert_eq!(SortOrder::from_id(sort.id()), sort);
        }
        assert_eq!(SortOrder::from_id("bogus"), SortOrder::Recommended);
        assert_eq!(CategoryFilter::from_id("bogus"), CategoryFilter::All);
    }
}
