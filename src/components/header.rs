//! Site Header
//!
//! Brand, page navigation, and the cart badge. The badge waits for cart
//! hydration so a freshly loaded page never flashes an empty count over a
//! saved cart.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{read_cart, use_app_store};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let badge = Memo::new(move |_| read_cart(&store, |cart| (cart.is_hydrated(), cart.cart_count())));

    let nav_button = move |label: &'static str, page: Page| {
        view! {
            <button
                class="nav-link"
                class:active=move || ctx.page.get() == page
                on:click=move |_| ctx.navigate(page)
            >
                {label}
            </button>
        }
    };

    view! {
        <header class="site-header">
            <button class="brand" on:click=move |_| ctx.navigate(Page::Home)>
                "Foodhub"
            </button>

            <nav class="site-nav">
                {nav_button("Home", Page::Home)}
                {nav_button("Menu", Page::Menu)}
                {nav_button("Order", Page::Order)}
            </nav>

            <button class="cart-button" on:click=move |_| ctx.navigate(Page::Order)>
                "Cart"
                <Show when=move || {
                    let (hydrated, count) = badge.get();
                    hydrated && count > 0
                }>
                    <span class="count">{move || badge.get().1}</span>
                </Show>
            </button>
        </header>
    }
}
