//! Home Page
//!
//! Landing view: hero, featured dishes with add-to-cart, service
//! highlights, and testimonials. All content comes from the static catalog.

use leptos::prelude::*;

use foodhub_core::catalog;

use crate::components::ProductRating;
use crate::context::{use_app_context, Page};
use crate::store::{store_add_to_cart, use_app_store};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <section class="home-hero">
            <p class="eyebrow">"Taste the difference"</p>
            <h1>"Good food, served with heart"</h1>
            <p class="lead">
                "Seasonal plates, organic produce, and a kitchen that treats every \
                 order like a table of old friends."
            </p>
            <div class="hero-actions">
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Menu)>
                    "Explore menu"
                </button>
                <button class="btn btn-secondary" on:click=move |_| ctx.navigate(Page::Order)>
                    "Review order"
                </button>
            </div>
        </section>

        <section class="home-products">
            <h2>"Guests' favorite dishes"</h2>
            <div class="product-grid">
                {catalog::featured_products()
                    .iter()
                    .map(|product| {
                        let add_product = product.clone();
                        view! {
                            <article class="product-card">
                                <img src=product.image.clone() alt=product.name.clone()/>
                                <h3>{product.name.clone()}</h3>
                                <p class="description">{product.description.clone()}</p>
                                <ProductRating rating=product.rating/>
                                <div class="product-card__footer">
                                    <span class="price">
                                        <span class="currency">"$"</span>
                                        {product.price}
                                    </span>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| store_add_to_cart(&store, &add_product)
                                    >
                                        "Add to cart"
                                    </button>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="home-services">
            <h2>"Why guests keep coming back"</h2>
            <ul class="service-list">
                {catalog::services()
                    .iter()
                    .map(|service| {
                        view! {
                            <li class="service-item">
                                <span class="service-number">{service.number.clone()}</span>
                                <div>
                                    <h3>{service.title.clone()}</h3>
                                    <p>{service.description.clone()}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>

        <section class="home-testimonials">
            <h2>"What our guests say"</h2>
            <div class="testimonial-grid">
                {catalog::testimonials()
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <figure class="testimonial-card">
                                <ProductRating rating=Some(testimonial.rating)/>
                                <h3>{testimonial.title.clone()}</h3>
                                <blockquote>{testimonial.body.clone()}</blockquote>
                                <figcaption>
                                    <img src=testimonial.image.clone() alt=testimonial.name.clone()/>
                                    <span>{testimonial.name.clone()}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
