//! Checkout Page
//!
//! Demo checkout: contact details, dining preferences, notes, and the
//! order summary with tax. Submission validates the required fields and
//! resets the form; no payment is taken. Totals always derive from the
//! live cart, so a cart emptied mid-session zeroes fee and tax at once.

use leptos::prelude::*;

use foodhub_core::checkout::{CheckoutDetails, DiningOption, OrderTotals};

use crate::context::{use_app_context, Page};
use crate::store::{read_cart, use_app_store};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (details, set_details) = signal(CheckoutDetails::default());
    let (submit_attempted, set_submit_attempted) = signal(false);

    let is_empty = Memo::new(move |_| read_cart(&store, |cart| cart.is_empty()));
    let totals = Memo::new(move |_| read_cart(&store, OrderTotals::checkout));

    let field_error = move |field: &'static str| {
        view! {
            <Show when=move || {
                submit_attempted.get()
                    && details.with(|d| d.missing_required().contains(&field))
            }>
                <span class="field-error">{format!("Please enter your {field}.")}</span>
            </Show>
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submit_attempted.set(true);
        if details.with(|d| d.is_complete()) {
            web_sys::console::log_1(&"[Checkout] order request submitted".into());
            // Demo flow: validated submissions simply reset the form.
            set_details.set(CheckoutDetails::default());
            set_submit_attempted.set(false);
        }
    };

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=move || {
                let ctx = use_app_context();
                view! {
                    <section class="checkout-page checkout-page--empty">
                        <div class="checkout-page__hero">
                            <h1>"Your table is waiting"</h1>
                            <p>
                                "Add a few dishes to your order before heading to checkout \
                                 so we can prep everything with care."
                            </p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| ctx.navigate(Page::Menu)
                            >
                                "Browse the menu"
                            </button>
                        </div>
                    </section>
                }
            }
        >
            <section class="checkout-page">
                <header class="checkout-page__hero">
                    <button
                        class="checkout-page__back"
                        on:click=move |_| ctx.navigate(Page::Order)
                    >
                        "Order overview"
                    </button>
                    <div>
                        <h1>"Checkout"</h1>
                        <p>
                            "Share your details and timing so we can have everything ready \
                             the moment you arrive."
                        </p>
                    </div>
                </header>

                <div class="checkout-page__layout">
                    <form class="checkout-form" on:submit=on_submit>
                        <fieldset>
                            <legend>"Contact details"</legend>

                            <label>
                                "Full name"
                                <input
                                    type="text"
                                    placeholder="Anna Portfolio"
                                    prop:value=move || details.with(|d| d.full_name.clone())
                                    on:input=move |ev| {
                                        set_details.update(|d| d.full_name = event_target_value(&ev))
                                    }
                                />
                                {field_error("full name")}
                            </label>

                            <label>
                                "Email address"
                                <input
                                    type="email"
                                    placeholder="anna@example.com"
                                    prop:value=move || details.with(|d| d.email.clone())
                                    on:input=move |ev| {
                                        set_details.update(|d| d.email = event_target_value(&ev))
                                    }
                                />
                                {field_error("email address")}
                            </label>

                            <label>
                                "Phone number"
                                <input
                                    type="tel"
                                    placeholder="(+84) 123 456 789"
                                    prop:value=move || details.with(|d| d.phone.clone())
                                    on:input=move |ev| {
                                        set_details.update(|d| d.phone = event_target_value(&ev))
                                    }
                                />
                                {field_error("phone number")}
                            </label>
                        </fieldset>

                        <fieldset>
                            <legend>"Dining preferences"</legend>

                            <div class="checkout-form__options">
                                <label class="option">
                                    <input
                                        type="radio"
                                        name="diningOption"
                                        value="dine-in"
                                        prop:checked=move || {
                                            details.with(|d| d.dining_option) == DiningOption::DineIn
                                        }
                                        on:change=move |ev| {
                                            set_details.update(|d| {
                                                d.dining_option =
                                                    DiningOption::from_str(&event_target_value(&ev))
                                            })
                                        }
                                    />
                                    <span>
                                        "Dine in"
                                        <small>"We will have your table staged before you arrive."</small>
                                    </span>
                                </label>

                                <label class="option">
                                    <input
                                        type="radio"
                                        name="diningOption"
                                        value="takeaway"
                                        prop:checked=move || {
                                            details.with(|d| d.dining_option) == DiningOption::Takeaway
                                        }
                                        on:change=move |ev| {
                                            set_details.update(|d| {
                                                d.dining_option =
                                                    DiningOption::from_str(&event_target_value(&ev))
                                            })
                                        }
                                    />
                                    <span>
                                        "Takeaway"
                                        <small>"We will package everything to travel beautifully."</small>
                                    </span>
                                </label>
                            </div>

                            <label>
                                "Desired arrival time"
                                <input
                                    type="time"
                                    prop:value=move || details.with(|d| d.arrival_time.clone())
                                    on:input=move |ev| {
                                        set_details.update(|d| d.arrival_time = event_target_value(&ev))
                                    }
                                />
                            </label>
                        </fieldset>

                        <fieldset>
                            <legend>"Special notes"</legend>

                            <textarea
                                rows="4"
                                placeholder="Allergies, celebrations, seating preferences..."
                                prop:value=move || details.with(|d| d.notes.clone())
                                on:input=move |ev| {
                                    set_details.update(|d| d.notes = event_target_value(&ev))
                                }
                            ></textarea>
                        </fieldset>

                        <button type="submit" class="btn btn-primary checkout-form__submit">
                            "Place order request"
                        </button>
                    </form>

                    <aside class="checkout-summary">
                        <h2>"Your order"</h2>

                        <ul class="checkout-summary__list">
                            <For
                                each=move || read_cart(&store, |cart| cart.lines().to_vec())
                                key=|line| (line.id.clone(), line.quantity)
                                children=move |line| {
                                    view! {
                                        <li>
                                            <img src=line.image.clone() alt=line.name.clone()/>
                                            <div class="copy">
                                                <p class="name">{line.name.clone()}</p>
                                                <p class="meta">{format!("Quantity: {}", line.quantity)}</p>
                                            </div>
                                            <span class="price">
                                                {format!("${:.2}", line.line_total())}
                                            </span>
                                        </li>
                                    }
                                }
                            />
                        </ul>

                        <dl class="checkout-summary__totals">
                            <div>
                                <dt>"Subtotal"</dt>
                                <dd>{move || format!("${:.2}", totals.get().subtotal)}</dd>
                            </div>
                            <div>
                                <dt>"Tax (8%)"</dt>
                                <dd>{move || format!("${:.2}", totals.get().tax)}</dd>
                            </div>
                            <div>
                                <dt>"Service fee"</dt>
                                <dd>{move || format!("${:.2}", totals.get().service_fee)}</dd>
                            </div>
                            <div class="checkout-summary__total">
                                <dt>"Total due"</dt>
                                <dd>{move || format!("${:.2}", totals.get().total)}</dd>
                            </div>
                        </dl>

                        <p class="checkout-summary__note">
                            "After submitting, a host will confirm your order details by \
                             phone or email within a few minutes."
                        </p>
                    </aside>
                </div>
            </section>
        </Show>
    }
}
