//! Application Context
//!
//! Page navigation provided via Leptos Context API. The site is statically
//! exported with no router; views switch on a single page signal.

use leptos::prelude::*;

/// Top-level views of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Menu,
    Order,
    Checkout,
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently shown page - read
    pub page: ReadSignal<Page>,
    /// Currently shown page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context; panics when used outside the provider (wiring bug)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
