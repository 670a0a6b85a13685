//! Product Rating Component
//!
//! Five-star row with half-point granularity.

use leptos::prelude::*;

/// Star rating display; a missing rating renders as five stars, matching
/// the featured dishes which are all rated 5.
#[component]
pub fn ProductRating(#[prop(optional_no_strip)] rating: Option<f64>) -> impl IntoView {
    let rating = rating.unwrap_or(5.0);
    let full = rating.floor() as u32;
    let has_half = rating - rating.floor() >= 0.5;

    view! {
        <div class="product-rating">
            {(1..=5u32)
                .map(|i| {
                    let glyph = if i <= full {
                        "★"
                    } else if i == full + 1 && has_half {
                        "⯨"
                    } else {
                        "☆"
                    };
                    view! { <span class="star">{glyph}</span> }
                })
                .collect_view()}
        </div>
    }
}
