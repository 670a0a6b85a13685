//! Order Review Page
//!
//! Quantity fine-tuning before checkout. Cards are keyed on (id, quantity)
//! so a stepper click re-renders just the affected card; when the last
//! line disappears the whole page falls back to the empty-cart hero.

use leptos::prelude::*;

use crate::components::{OrderCard, OrderSummary};
use crate::context::{use_app_context, Page};
use crate::store::{read_cart, use_app_store};

#[component]
pub fn OrderPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let is_empty = Memo::new(move |_| read_cart(&store, |cart| cart.is_empty()));

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=move || {
                let ctx = use_app_context();
                view! {
                    <section class="order-page order-page--empty">
                        <div class="order-page__hero">
                            <h1>"Build your first order"</h1>
                            <p>
                                "Your cart is quietly waiting. Discover the menu and tap the \
                                 dishes you want to bring to the table."
                            </p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| ctx.navigate(Page::Menu)
                            >
                                "Explore menu"
                            </button>
                        </div>
                    </section>
                }
            }
        >
            <section class="order-page">
                <header class="order-page__hero">
                    <button
                        class="order-page__back"
                        on:click=move |_| ctx.navigate(Page::Home)
                    >
                        "Home"
                    </button>
                    <div>
                        <h1>"Review your order"</h1>
                        <p>
                            "Fine-tune quantities, remove plates, and make sure the spread \
                             feels just right before checkout."
                        </p>
                    </div>
                </header>

                <div class="order-page__layout">
                    <div class="order-page__list">
                        <For
                            each=move || read_cart(&store, |cart| cart.lines().to_vec())
                            key=|line| (line.id.clone(), line.quantity)
                            children=move |line| view! { <OrderCard line=line/> }
                        />
                    </div>

                    <OrderSummary/>
                </div>
            </section>
        </Show>
    }
}
