//! Cart Notification Toast
//!
//! Transient "added to cart" toast driven by the engine's notification
//! state. Dismisses itself after a fixed delay or on the close button.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{read_cart, store_clear_notification, use_app_store};

/// Auto-dismiss delay in milliseconds
const AUTO_DISMISS_MS: u32 = 3200;

#[component]
pub fn CartNotification() -> impl IntoView {
    let store = use_app_store();

    // Keyed on the sequence number, so adding the same dish twice in a row
    // still restarts the timer.
    let seq = Memo::new(move |_| read_cart(&store, |cart| cart.notification().map(|n| n.seq)));

    // Pending dismiss timer. Cancelled before every reschedule: a stale
    // dismiss must never fire after a newer notification has appeared.
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let active = seq.get().is_some();
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        if active {
            let timer = Timeout::new(AUTO_DISMISS_MS, move || {
                store_clear_notification(&store);
            });
            pending.set_value(Some(timer));
        }
    });

    view! {
        {move || {
            read_cart(&store, |cart| cart.notification().cloned())
                .map(|notification| {
                    view! {
                        <aside class="cart-notification">
                            <div class="cart-notification__media">
                                <img src=notification.image alt=""/>
                            </div>

                            <div class="cart-notification__content">
                                <p class="cart-notification__title">"Added to cart"</p>
                                <p class="cart-notification__body">
                                    {notification.name}
                                    <span>{format!("×{}", notification.quantity)}</span>
                                </p>
                            </div>

                            <button
                                class="cart-notification__close"
                                on:click=move |_| store_clear_notification(&store)
                            >
                                "×"
                            </button>
                        </aside>
                    }
                })
        }}
    }
}
