//! Product form panel.
//!
//! One controlled input per draft field. Every input forwards its value to
//! the form controller, which clears that field's stored error; errors are
//! recomputed only when the form is submitted.

use leptos::prelude::*;
use stocklist::{
    form::{FormController, SubmitOutcome},
    notify::{self, Notifier, Severity},
    products::Category,
    store::RecordStore,
    validate::{Field, NAME_MAX_CHARS, PRICE_MIN, STOCK_MAX, STOCK_MIN},
};

use crate::{storage::BrowserStorage, toast};

fn feedback_parts(message: Option<String>) -> (&'static str, String) {
    match message {
        Some(value) => ("field-feedback", value),
        None => ("field-feedback field-feedback-hidden", String::new()),
    }
}

fn submit_label(is_editing: bool) -> &'static str {
    if is_editing { "Save Changes" } else { "Add Product" }
}

fn submit_class(is_editing: bool) -> &'static str {
    if is_editing {
        "button button-primary"
    } else {
        "button button-success"
    }
}

fn panel_title(is_editing: bool) -> &'static str {
    if is_editing { "Edit Product" } else { "Add Product" }
}

/// Inline feedback line under a field; it keeps its slot when empty so the
/// layout does not jump while errors come and go.
#[component]
fn FieldFeedback(message: Option<String>) -> impl IntoView {
    let (classes, value) = feedback_parts(message);

    view! { <p class=classes>{value}</p> }
}

/// Form panel component.
#[component]
pub fn FormPanel(
    /// Catalog the submit and delete-while-editing paths mutate.
    store: RwSignal<RecordStore<BrowserStorage>>,
    /// Shared form state machine.
    form: RwSignal<FormController>,
    /// Toast target for submit feedback.
    notifier: RwSignal<Notifier>,
) -> impl IntoView {
    let today_iso = crate::today().to_string();

    let is_editing = move || form.with(FormController::is_editing);
    let field_message = move |field: Field| form.with(|form| form.errors().message(field));
    let field_invalid = move |field: Field| form.with(|form| form.errors().get(field).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut outcome = SubmitOutcome::Rejected;
        store.update(|store| {
            form.update(|form| {
                outcome = form.submit(store, crate::today(), crate::now_millis());
            });
        });

        match outcome {
            SubmitOutcome::Rejected => {
                toast::show(notifier, notify::MSG_CHECK_INPUT, Severity::Danger);
            }
            SubmitOutcome::Created(_) => {
                toast::show(notifier, notify::MSG_ADDED, Severity::Success);
            }
            SubmitOutcome::Updated(_) => {
                toast::show(notifier, notify::MSG_UPDATED, Severity::Success);
            }
        }
    };

    view! {
        <section class="panel form-panel">
            <h2 class="panel-title">{move || panel_title(is_editing())}</h2>
            <form class="product-form" novalidate=true on:submit=on_submit>
                <div class="form-field">
                    <label class="form-label" for="product-name">"Name"</label>
                    <input
                        id="product-name"
                        class="form-input"
                        class:form-input-invalid=move || field_invalid(Field::Name)
                        type="text"
                        placeholder="Example: Lenovo Z40 laptop"
                        maxlength=NAME_MAX_CHARS.to_string()
                        prop:value=move || form.with(|form| form.draft().name.clone())
                        on:input=move |ev| {
                            form.update(|form| form.set_name(event_target_value(&ev)));
                        }
                    />
                    {move || view! { <FieldFeedback message=field_message(Field::Name) /> }}
                </div>

                <div class="form-field">
                    <label class="form-label" for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        class="form-input"
                        class:form-input-invalid=move || field_invalid(Field::Description)
                        rows="2"
                        placeholder="At least 20 characters"
                        prop:value=move || form.with(|form| form.draft().description.clone())
                        on:input=move |ev| {
                            form.update(|form| form.set_description(event_target_value(&ev)));
                        }
                    ></textarea>
                    {move || view! { <FieldFeedback message=field_message(Field::Description) /> }}
                </div>

                <div class="form-field">
                    <label class="form-label" for="product-price">"Price"</label>
                    <input
                        id="product-price"
                        class="form-input"
                        class:form-input-invalid=move || field_invalid(Field::Price)
                        type="number"
                        min=PRICE_MIN.to_string()
                        step="1"
                        placeholder="Price"
                        prop:value=move || form.with(|form| form.draft().price.clone())
                        on:input=move |ev| {
                            form.update(|form| form.set_price(event_target_value(&ev)));
                        }
                    />
                    {move || view! { <FieldFeedback message=field_message(Field::Price) /> }}
                </div>

                <div class="form-field">
                    <label class="form-label" for="product-category">"Category"</label>
                    <select
                        id="product-category"
                        class="form-input"
                        class:form-input-invalid=move || field_invalid(Field::Category)
                        prop:value=move || form.with(|form| form.draft().category.clone())
                        on:change=move |ev| {
                            form.update(|form| form.set_category(event_target_value(&ev)));
                        }
                    >
                        <option value="">"-- Select category --"</option>
                        {Category::ALL
                            .iter()
                            .map(|category| {
                                view! {
                                    <option value=category.label()>{category.label()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                    {move || view! { <FieldFeedback message=field_message(Field::Category) /> }}
                </div>

                <div class="form-field">
                    <label class="form-label" for="product-release-date">"Release date"</label>
                    <input
                        id="product-release-date"
                        class="form-input"
                        class:form-input-invalid=move || field_invalid(Field::ReleaseDate)
                        type="date"
                        max=today_iso
                        prop:value=move || form.with(|form| form.draft().release_date.clone())
                        on:input=move |ev| {
                            form.update(|form| form.set_release_date(event_target_value(&ev)));
                        }
                    />
                    {move || view! { <FieldFeedback message=field_message(Field::ReleaseDate) /> }}
                </div>

                <div class="form-field">
                    <label class="form-label" for="product-stock">"Stock on hand"</label>
                    <input
                        id="product-stock"
                        class="form-input"
                        class:form-input-invalid=move || field_invalid(Field::Stock)
                        type="number"
                        min=STOCK_MIN.to_string()
                        max=STOCK_MAX.to_string()
                        prop:value=move || form.with(|form| form.draft().stock.clone())
                        on:input=move |ev| {
                            form.update(|form| form.set_stock(event_target_value(&ev)));
                        }
                    />
                    {move || view! { <FieldFeedback message=field_message(Field::Stock) /> }}
                </div>

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|form| form.draft().active)
                        on:change=move |ev| {
                            form.update(|form| form.set_active(event_target_checked(&ev)));
                        }
                    />
                    <span>"Active product"</span>
                </label>

                <div class="form-actions">
                    <button type="submit" class=move || submit_class(is_editing())>
                        {move || submit_label(is_editing())}
                    </button>
                    {move || {
                        if is_editing() {
                            view! {
                                <button
                                    type="button"
                                    class="button button-secondary"
                                    on:click=move |_| form.update(FormController::cancel_edit)
                                >
                                    "Cancel"
                                </button>
                            }
                                .into_any()
                        } else {
                            ().into_any()
                        }
                    }}
                </div>
            </form>
        </section>
    }
}
