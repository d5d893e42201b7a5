//! Stocklist
//!
//! Domain core of a single-page product catalog manager: an ordered record
//! store mirrored into one persisted blob, a pure draft validator, a
//! create/edit form controller and a transient notifier. This crate is
//! UI-free and fully synchronous; the companion `stocklist-app` crate renders
//! it in the browser.

pub mod fixtures;
pub mod form;
pub mod notify;
pub mod products;
pub mod store;
pub mod validate;
