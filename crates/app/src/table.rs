//! Product table panel.

use leptos::prelude::*;
use stocklist::{
    form::{DeleteOutcome, FormController},
    notify::{self, Notifier, Severity},
    products::Product,
    store::RecordStore,
};

use crate::{confirm, storage::BrowserStorage, toast};

/// Format a price with thousands separators, e.g. `1050000` -> `"1,050,000"`.
fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if price < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn active_label(active: bool) -> &'static str {
    if active { "Yes" } else { "No" }
}

#[component]
fn ProductRow(
    index: usize,
    product: Product,
    store: RwSignal<RecordStore<BrowserStorage>>,
    form: RwSignal<FormController>,
    notifier: RwSignal<Notifier>,
) -> impl IntoView {
    let id = product.id;
    let name = product.name.clone();
    let description = product.description.clone();
    let price = format_price(product.price);
    let category = product.category.label();
    let released = product.release_date.to_string();
    let stock = product.stock;
    let active = active_label(product.active);
    let edit_source = product;

    let on_edit = move |_| form.update(|form| form.start_edit(&edit_source));

    let on_delete = move |_| {
        let mut outcome = DeleteOutcome::NotFound;
        store.update(|store| {
            form.update(|form| {
                outcome = form.delete(store, id, confirm::confirm_delete);
            });
        });

        if matches!(outcome, DeleteOutcome::Removed(_)) {
            toast::show(notifier, notify::MSG_DELETED, Severity::Success);
        }
    };

    view! {
        <tr>
            <td class="cell-center">{index.saturating_add(1)}</td>
            <td>{name}</td>
            <td>{description}</td>
            <td class="cell-number">{price}</td>
            <td>{category}</td>
            <td>{released}</td>
            <td class="cell-number">{stock}</td>
            <td>{active}</td>
            <td class="cell-center">
                <div class="row-actions">
                    <button type="button" class="button button-small button-warning" on:click=on_edit>
                        "Edit"
                    </button>
                    <button type="button" class="button button-small button-danger" on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Table panel component.
#[component]
pub fn TablePanel(
    /// Catalog rendered into rows.
    store: RwSignal<RecordStore<BrowserStorage>>,
    /// Shared form state machine, entered via the per-row Edit button.
    form: RwSignal<FormController>,
    /// Toast target for delete feedback.
    notifier: RwSignal<Notifier>,
) -> impl IntoView {
    view! {
        <section class="panel table-panel">
            <h2 class="panel-title">"Products"</h2>
            <table class="catalog-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Price"</th>
                        <th>"Category"</th>
                        <th>"Released"</th>
                        <th>"Stock"</th>
                        <th>"Active"</th>
                        <th class="cell-center">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let records = store.with(|store| store.records().to_vec());

                        if records.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="9" class="table-empty">"No products yet."</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            records
                                .into_iter()
                                .enumerate()
                                .map(|(index, product)| {
                                    view! {
                                        <ProductRow
                                            index=index
                                            product=product
                                            store=store
                                            form=form
                                            notifier=notifier
                                        />
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </section>
    }
}
