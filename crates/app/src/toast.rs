//! Transient toast notifications.
//!
//! [`show`] replaces the visible notice and schedules its auto-dismiss.
//! The timer remembers the notice generation it was scheduled for, so when a
//! newer notice arrives before it fires, the stale timer's dismissal becomes
//! a no-op and the newer notice stays up for its full delay.

use leptos::{prelude::*, task};
use stocklist::notify::{AUTO_DISMISS_MS, Notifier, Severity};

/// Show a notice and schedule its auto-dismiss after
/// [`AUTO_DISMISS_MS`] milliseconds.
pub fn show(notifier: RwSignal<Notifier>, message: &str, severity: Severity) {
    let mut generation = 0;
    notifier.update(|notifier| generation = notifier.show(message, severity));

    task::spawn_local(async move {
        wait_for_timeout(AUTO_DISMISS_MS).await;

        notifier.update(|notifier| {
            notifier.dismiss_if_current(generation);
        });
    });
}

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "toast toast-success",
        Severity::Danger => "toast toast-danger",
    }
}

/// Fixed corner container for the current notice. Renders nothing while no
/// notice is visible.
#[component]
pub fn ToastArea(
    /// Notice source shared with the rest of the app.
    notifier: RwSignal<Notifier>,
) -> impl IntoView {
    view! {
        <div class="toast-area">
            {move || {
                notifier
                    .with(|notifier| notifier.current().cloned())
                    .map_or_else(
                        || ().into_any(),
                        |notice| {
                            view! {
                                <div class=toast_class(notice.severity) role="alert">
                                    <div class="toast-header">
                                        <strong class="toast-title">"Notification"</strong>
                                        <small class="toast-hint">"just now"</small>
                                        <button
                                            type="button"
                                            class="toast-close"
                                            aria-label="Dismiss notification"
                                            on:click=move |_| notifier.update(Notifier::dismiss)
                                        >
                                            "\u{d7}"
                                        </button>
                                    </div>
                                    <p class="toast-body">{notice.message}</p>
                                </div>
                            }
                            .into_any()
                        },
                    )
            }}
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
async fn wait_for_timeout(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    let _ = JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn wait_for_timeout(_delay_ms: i32) {
    task::tick().await;
}
