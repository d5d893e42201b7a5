//! Delete confirmation capability.
//!
//! The form controller takes confirmation as an injected closure; this
//! module provides the browser implementation backed by the modal
//! `window.confirm` dialog.

use stocklist::products::Product;

#[cfg(any(target_arch = "wasm32", test))]
fn confirm_message(product: &Product) -> String {
    format!("Delete product \"{}\"?", product.name)
}

/// Ask the user to confirm deleting `product`. Blocks until the dialog is
/// answered; an unavailable window counts as declined.
#[cfg(target_arch = "wasm32")]
pub fn confirm_delete(product: &Product) -> bool {
    let message = confirm_message(product);

    web_sys::window()
        .and_then(|window| window.confirm_with_message(&message).ok())
        .unwrap_or(false)
}

/// There is no dialog to show outside the browser; treat as declined.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm_delete(_product: &Product) -> bool {
    false
}
