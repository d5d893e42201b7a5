//! Stocklist Application
//!
//! Client-side-rendered product catalog manager: a form for creating and
//! editing records, a table listing them and a transient toast, persisted
//! into the browser's local storage. All state transitions run synchronously
//! inside DOM event handlers; the only deferred work is the toast
//! auto-dismiss timer.

use jiff::{Timestamp, Zoned, civil::Date};
use leptos::prelude::*;
use stocklist::{form::FormController, notify::Notifier, store::RecordStore};

mod confirm;
mod form;
mod storage;
mod table;
mod toast;

/// Today's civil date in the user's time zone.
fn today() -> Date {
    Zoned::now().date()
}

/// Millisecond timestamp used to seed fresh record ids.
fn now_millis() -> i64 {
    Timestamp::now().as_millisecond()
}

/// Application shell: loads the catalog once, then shares the store, the
/// form controller and the notifier with the panels through signals.
#[component]
fn App() -> impl IntoView {
    let store = RwSignal::new(RecordStore::load(storage::BrowserStorage::default(), today()));
    let form = RwSignal::new(FormController::default());
    let notifier = RwSignal::new(Notifier::default());

    view! {
        <main class="page">
            <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                {move || {
                    notifier.with(|notifier| {
                        notifier
                            .current()
                            .map(|notice| notice.message.clone())
                            .unwrap_or_default()
                    })
                }}
            </p>
            <div class="page-header">
                <h1 class="page-title">"Product Catalog"</h1>
            </div>
            <div class="layout">
                <form::FormPanel store=store form=form notifier=notifier />
                <table::TablePanel store=store form=form notifier=notifier />
            </div>
            <toast::ToastArea notifier=notifier />
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
