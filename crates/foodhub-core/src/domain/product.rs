//! Product Entity
//!
//! A static, read-only menu/product record. Products are defined in the
//! embedded catalog data and never mutated at runtime.

use serde::{Deserialize, Serialize};

/// Menu lane a product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starters,
    Mains,
    Sides,
    Desserts,
    Drinks,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Sides => "sides",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }
}

/// Dietary/highlight tag attached to a product
///
/// Tag filtering on the menu page is an AND across all selected tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegan,
    Hot,
    GlutenFree,
    New,
    Signature,
    Seasonal,
}

impl DietaryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegan => "vegan",
            DietaryTag::Hot => "hot",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::New => "new",
            DietaryTag::Signature => "signature",
            DietaryTag::Seasonal => "seasonal",
        }
    }

    /// Tag label as shown on product cards ("gluten-free" -> "gluten free")
    pub fn card_label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

/// A static menu/product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier (join key for cart lines)
    pub id: String,
    pub name: String,
    /// Price in currency units, non-negative
    pub price: f64,
    pub description: String,
    /// Image path reference
    pub image: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<DietaryTag>,
    /// 0-5, half points allowed
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub calories: Option<u32>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub highlight: Option<String>,
}

impl Product {
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Rating with a missing value treated as 0 (sorts last under Top rated)
    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        assert_eq!(Category::Starters.as_str(), "starters");
        let decoded: Category = serde_json::from_str("\"mains\"").unwrap();
        assert_eq!(decoded, Category::Mains);
    }

    #[test]
    fn test_tag_serialization() {
        let decoded: DietaryTag = serde_json::from_str("\"gluten-free\"").unwrap();
        assert_eq!(decoded, DietaryTag::GlutenFree);
        assert_eq!(DietaryTag::GlutenFree.card_label(), "gluten free");
    }

    #[test]
    fn test_product_decodes_with_optional_fields_missing() {
        let product: Product = serde_json::from_str(
            r#"{"id":"dish-01","name":"Stracciatella","price":11,"description":"x","image":"/images/menu1.jpg"}"#,
        )
        .unwrap();
        assert!(product.category.is_none());
        assert!(product.tags.is_empty());
        assert_eq!(product.rating_or_default(), 0.0);
    }
}
