//! Foodhub Frontend App
//!
//! Main application component: constructs the store, wires cart
//! persistence, and switches between the four site pages.

use leptos::prelude::*;

use crate::components::{CartNotification, CheckoutPage, Header, HomePage, MenuPage, OrderPage};
use crate::context::{AppContext, Page};
use crate::store::{init_cart_effects, provide_app_store};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::default());

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));
    let store = provide_app_store();

    // Load the cart from localStorage after mount, then keep it saved
    init_cart_effects(store);

    view! {
        <div class="site">
            <Header/>

            <main class="site-main">
                {move || match page.get() {
                    Page::Home => view! { <HomePage/> }.into_any(),
                    Page::Menu => view! { <MenuPage/> }.into_any(),
                    Page::Order => view! { <OrderPage/> }.into_any(),
                    Page::Checkout => view! { <CheckoutPage/> }.into_any(),
                }}
            </main>

            <CartNotification/>
        </div>
    }
}
