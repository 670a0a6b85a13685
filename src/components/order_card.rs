//! Order Card
//!
//! One cart line on the order review page: quantity stepper, remove
//! action, unit price, and line total.

use leptos::prelude::*;

use foodhub_core::domain::CartLine;

use crate::store::{store_decrement_item, store_increment_item, store_remove_item, use_app_store};

#[component]
pub fn OrderCard(line: CartLine) -> impl IntoView {
    let store = use_app_store();

    let decrement_id = line.id.clone();
    let increment_id = line.id.clone();
    let remove_id = line.id.clone();

    view! {
        <article class="order-card">
            <div class="order-card__media">
                <img src=line.image.clone() alt=line.name.clone()/>
            </div>

            <div class="order-card__content">
                <header class="order-card__header">
                    <h2>{line.name.clone()}</h2>
                    <button
                        class="order-card__remove"
                        on:click=move |_| store_remove_item(&store, &remove_id)
                    >
                        "Remove"
                    </button>
                </header>

                <p class="order-card__price">
                    <span class="currency">"$"</span>
                    {line.price}
                </p>

                <div class="order-card__actions">
                    <div class="order-card__quantity">
                        <button on:click=move |_| store_decrement_item(&store, &decrement_id)>
                            "−"
                        </button>
                        <span>{line.quantity}</span>
                        <button on:click=move |_| store_increment_item(&store, &increment_id)>
                            "+"
                        </button>
                    </div>

                    <p class="order-card__total">
                        <span class="currency">"$"</span>
                        {format!("{:.2}", line.line_total())}
                    </p>
                </div>
            </div>
        </article>
    }
}
