//! Menu Product Card
//!
//! One dish in the menu grid with its meta row, tags, rating, and the
//! add-to-cart action. Catalog data is static, so everything except the
//! add button renders once.

use leptos::prelude::*;

use foodhub_core::domain::{DietaryTag, Product};

use crate::components::ProductRating;
use crate::store::{store_add_to_cart, use_app_store};

#[component]
pub fn ProductCard(item: Product) -> impl IntoView {
    let store = use_app_store();

    let calories_label = item
        .calories
        .map(|calories| format!("{calories} kcal"))
        .unwrap_or_else(|| "Light & bright".to_string());
    let prep_label = format!("Ready in {} min", item.prep_time.unwrap_or(10));

    let badge = item
        .has_tag(DietaryTag::Signature)
        .then(|| view! { <span class="menu-card__badge">"Chef signature"</span> });

    let category = item
        .category
        .map(|category| view! { <p class="menu-card__category">{category.as_str()}</p> });

    let highlight = item
        .highlight
        .clone()
        .map(|highlight| view! { <p class="menu-card__highlight">{highlight}</p> });

    let tags = (!item.tags.is_empty()).then(|| {
        view! {
            <ul class="menu-card__tags">
                {item
                    .tags
                    .iter()
                    .map(|tag| view! { <li>{tag.card_label()}</li> })
                    .collect_view()}
            </ul>
        }
    });

    let add_item = item.clone();

    view! {
        <article class="menu-card">
            <div class="menu-card__image">
                <img src=item.image.clone() alt=item.name.clone()/>
                {badge}
            </div>

            <div class="menu-card__content">
                <header class="menu-card__header">
                    <h3>{item.name.clone()}</h3>
                    <p class="menu-card__price">
                        <span class="currency">"$"</span>
                        {item.price}
                    </p>
                </header>

                {category}
                <p class="menu-card__description">{item.description.clone()}</p>
                {highlight}

                <ul class="menu-card__meta">
                    <li>{calories_label}</li>
                    <li>{prep_label}</li>
                </ul>

                {tags}
            </div>

            <div class="menu-card__footer">
                <ProductRating rating=item.rating/>
                <button
                    class="btn btn-primary menu-card__cta"
                    on:click=move |_| store_add_to_cart(&store, &add_item)
                >
                    "Add to cart"
                </button>
            </div>
        </article>
    }
}
