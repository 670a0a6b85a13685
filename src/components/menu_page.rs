//! Menu Page
//!
//! Full menu browser: category lanes and dietary pills in the sidebar,
//! search and sort in the toolbar, and the filtered grid. All filter state
//! lives in the core menu view state; this component only renders it.

use leptos::prelude::*;

use foodhub_core::catalog;
use foodhub_core::menu::SortOrder;

use crate::components::ProductCard;
use crate::store::{
    read_menu, store_reset_filters, store_set_category, store_set_query, store_set_sort,
    store_toggle_tag, use_app_store,
};

#[component]
pub fn MenuPage() -> impl IntoView {
    let store = use_app_store();
    let (sidebar_open, set_sidebar_open) = signal(false);

    let visible = Memo::new(move |_| {
        read_menu(&store, |menu| menu.visible_items(catalog::menu_items()))
    });

    let result_label = move || {
        let count = visible.with(|items| items.len());
        format!("{} {}", count, if count == 1 { "dish" } else { "dishes" })
    };

    view! {
        <section class="menu-page">
            <div class="menu-hero">
                <p class="eyebrow">"Explore the full experience"</p>
                <h1 class="title">"Full menu"</h1>
                <p class="subtitle">
                    "Filter, sort, and discover plates made to share or savor solo."
                </p>
            </div>

            <div class="menu-layout">
                <aside class="menu-sidebar" class:open=move || sidebar_open.get()>
                    <button
                        class="sidebar-toggle"
                        on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                    >
                        "Filters"
                    </button>

                    <div class="sidebar-section">
                        <div class="sidebar-section__header">
                            <h2>"Categories"</h2>
                            <p>"Select a lane to shape the table."</p>
                        </div>
                        <ul>
                            {catalog::menu_categories()
                                .iter()
                                .map(|option| {
                                    let filter = option.filter;
                                    view! {
                                        <li>
                                            <button
                                                class="filter-chip"
                                                class:active=move || {
                                                    read_menu(&store, |m| m.active_category()) == filter
                                                }
                                                on:click=move |_| store_set_category(&store, filter)
                                            >
                                                <span>{option.label}</span>
                                                <small>{option.helper}</small>
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="sidebar-section">
                        <div class="sidebar-section__header">
                            <h2>"Dietary moods"</h2>
                            <p>"Layer on highlights for tailored picks."</p>
                        </div>
                        <ul class="dietary-list">
                            {catalog::dietary_filters()
                                .iter()
                                .map(|option| {
                                    let tag = option.tag;
                                    view! {
                                        <li>
                                            <button
                                                class="filter-pill"
                                                class:active=move || {
                                                    read_menu(&store, |m| m.is_tag_active(tag))
                                                }
                                                on:click=move |_| store_toggle_tag(&store, tag)
                                            >
                                                {option.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="sidebar-footer">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| store_reset_filters(&store)
                        >
                            "Reset filters"
                        </button>
                    </div>
                </aside>

                <div class="menu-main">
                    <div class="menu-toolbar">
                        <div class="toolbar-left">
                            <span class="result-count">{result_label}</span>
                            <input
                                class="menu-search"
                                type="search"
                                placeholder="Search dishes"
                                prop:value=move || read_menu(&store, |m| m.query().to_string())
                                on:input=move |ev| {
                                    store_set_query(&store, &event_target_value(&ev))
                                }
                            />
                        </div>

                        <div class="toolbar-right">
                            <span class="sort-label">"Sort by"</span>
                            <select
                                id="sort-menu"
                                prop:value=move || {
                                    read_menu(&store, |m| m.active_sort().id().to_string())
                                }
                                on:change=move |ev| {
                                    store_set_sort(&store, SortOrder::from_id(&event_target_value(&ev)))
                                }
                            >
                                {catalog::sort_options()
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.order.id()>{option.label}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="menu-grid">
                        <For
                            each=move || visible.get()
                            key=|item| item.id.clone()
                            children=move |item| view! { <ProductCard item=item/> }
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
