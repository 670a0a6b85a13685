//! Order Summary
//!
//! Totals aside on the order review page. Tax is applied at checkout, not
//! here; the service fee already follows the cart (zero when it empties).

use leptos::prelude::*;

use foodhub_core::checkout::OrderTotals;

use crate::context::{use_app_context, Page};
use crate::store::{read_cart, use_app_store};

#[component]
pub fn OrderSummary() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let totals = Memo::new(move |_| read_cart(&store, OrderTotals::review));
    let items_count = Memo::new(move |_| read_cart(&store, |cart| cart.lines().len()));

    view! {
        <aside class="order-summary">
            <h2>"Order summary"</h2>

            <dl class="order-summary__totals">
                <div>
                    <dt>{move || format!("Items ({})", items_count.get())}</dt>
                    <dd>{move || format!("${:.2}", totals.get().subtotal)}</dd>
                </div>
                <div>
                    <dt>"Service fee"</dt>
                    <dd>{move || format!("${:.2}", totals.get().service_fee)}</dd>
                </div>
                <div class="order-summary__grand">
                    <dt>"Total due"</dt>
                    <dd>{move || format!("${:.2}", totals.get().total)}</dd>
                </div>
            </dl>

            <p class="order-summary__note">
                "Need dietary tweaks or timing adjustments? Add a note during checkout \
                 and our team will tailor it."
            </p>

            <button
                class="btn btn-primary order-summary__cta"
                on:click=move |_| ctx.navigate(Page::Checkout)
            >
                "Proceed to checkout"
            </button>
        </aside>
    }
}
