//! Home Page Showcase Entities
//!
//! Static records rendered on the landing page alongside the featured
//! product grid.

use serde::{Deserialize, Serialize};

/// A numbered service highlight ("01 Located in the heart of the city")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub number: String,
    pub title: String,
    pub description: String,
}

/// A guest testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub title: String,
    pub body: String,
    pub name: String,
    pub image: String,
    pub rating: f64,
}
