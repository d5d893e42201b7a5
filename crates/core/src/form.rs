//! Form controller.
//!
//! A two-mode state machine: create mode (`editing` is `None`) and edit mode
//! (`editing` holds the id being modified). It owns the draft and the stored
//! field errors, and orchestrates validate, commit, reset against a
//! [`RecordStore`]. Field setters clear that field's stored error
//! optimistically; errors are only recomputed by the next submit.

use jiff::civil::Date;

use crate::{
    products::{Product, ProductDraft, ProductId},
    store::{RecordStore, StorageBackend},
    validate::{self, Field, ValidationErrors},
};

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are stored for display and the mode is
    /// unchanged.
    Rejected,

    /// A new record was added to the store.
    Created(ProductId),

    /// The record being edited was overwritten in place.
    Updated(ProductId),
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No record carries the requested id.
    NotFound,

    /// The user declined the confirmation; nothing changed.
    Declined,

    /// The record was removed from the store.
    Removed(Product),
}

/// Form state machine. Starts in create mode with a default draft.
#[derive(Debug, Default)]
pub struct FormController {
    draft: ProductDraft,
    errors: ValidationErrors,
    editing: Option<ProductId>,
}

impl FormController {
    /// The current draft values.
    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Errors stored by the last rejected submit, minus any cleared since.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Id of the record being edited, `None` in create mode.
    #[must_use]
    pub fn editing_id(&self) -> Option<ProductId> {
        self.editing
    }

    /// Whether the controller is in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enter edit mode for `record`: every draft field is loaded from it and
    /// prior errors are cleared.
    pub fn start_edit(&mut self, record: &Product) {
        self.draft = ProductDraft::from_record(record);
        self.errors = ValidationErrors::default();
        self.editing = Some(record.id);
    }

    /// Leave edit mode without committing: draft back to defaults, errors
    /// cleared.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Replace the name input and clear its stored error.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
        self.errors.clear(Field::Name);
    }

    /// Replace the description input and clear its stored error.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
        self.errors.clear(Field::Description);
    }

    /// Replace the price input and clear its stored error.
    pub fn set_price(&mut self, value: impl Into<String>) {
        self.draft.price = value.into();
        self.errors.clear(Field::Price);
    }

    /// Replace the selected category and clear its stored error.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.draft.category = value.into();
        self.errors.clear(Field::Category);
    }

    /// Replace the release date input and clear its stored error.
    pub fn set_release_date(&mut self, value: impl Into<String>) {
        self.draft.release_date = value.into();
        self.errors.clear(Field::ReleaseDate);
    }

    /// Replace the stock input and clear its stored error.
    pub fn set_stock(&mut self, value: impl Into<String>) {
        self.draft.stock = value.into();
        self.errors.clear(Field::Stock);
    }

    /// Flip the active toggle. The toggle has no validation rule, so no
    /// error is cleared.
    pub fn set_active(&mut self, active: bool) {
        self.draft.active = active;
    }

    /// Validate the draft and, when clean, commit it to the store: create
    /// mode adds a fresh record (id allocated from `id_seed`), edit mode
    /// overwrites the edited record in place. Either committed path resets
    /// the controller back to create mode.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &mut RecordStore<B>,
        today: Date,
        id_seed: i64,
    ) -> SubmitOutcome {
        let errors = validate::validate(&self.draft, store.records(), self.editing, today);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        let id = match self.editing {
            Some(id) => id,
            None => store.allocate_id(id_seed),
        };

        // Validation passed, so the draft coerces; a failure here means the
        // draft changed underneath us and is treated as a rejected submit.
        let Some(record) = self.draft.to_record(id) else {
            return SubmitOutcome::Rejected;
        };

        let outcome = if self.editing.is_some() {
            if !store.update(record) {
                return SubmitOutcome::Rejected;
            }
            SubmitOutcome::Updated(id)
        } else {
            store.add(record);
            SubmitOutcome::Created(id)
        };

        self.reset();

        outcome
    }

    /// Remove the record with `id` after asking `confirm`. A declined
    /// confirmation changes nothing. When the removed record was the one
    /// being edited, the form resets to create mode.
    pub fn delete<B, F>(
        &mut self,
        store: &mut RecordStore<B>,
        id: ProductId,
        confirm: F,
    ) -> DeleteOutcome
    where
        B: StorageBackend,
        F: FnOnce(&Product) -> bool,
    {
        let Some(target) = store.get(id) else {
            return DeleteOutcome::NotFound;
        };

        if !confirm(target) {
            return DeleteOutcome::Declined;
        }

        let Some(removed) = store.remove(id) else {
            return DeleteOutcome::NotFound;
        };

        if self.editing == Some(id) {
            self.reset();
        }

        DeleteOutcome::Removed(removed)
    }

    fn reset(&mut self) {
        self.draft = ProductDraft::default();
        self.errors = ValidationErrors::default();
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        store::MemoryStorage,
        validate::FieldError,
    };

    use super::*;

    const TODAY: Date = date(2025, 6, 15);

    fn empty_store() -> RecordStore<MemoryStorage> {
        RecordStore::load(MemoryStorage::with_blob("[]"), TODAY)
    }

    fn fill_valid(form: &mut FormController) {
        form.set_name("Espresso Grinder");
        form.set_description("Conical burr grinder with forty grind settings");
        form.set_price("899");
        form.set_category("Household");
        form.set_release_date("2025-05-20");
        form.set_stock("3");
    }

    #[test]
    fn valid_create_prepends_and_resets_to_create_mode() {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);

        let outcome = form.submit(&mut store, TODAY, 1000);

        assert_eq!(outcome, SubmitOutcome::Created(ProductId(1000)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records().first().map(|r| r.name.as_str()), Some("Espresso Grinder"));
        assert!(!form.is_editing());
        assert!(form.draft().name.is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn rejected_submit_keeps_mode_and_stores_errors() {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.set_name("");

        let outcome = form.submit(&mut store, TODAY, 1000);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(store.is_empty());
        assert_eq!(form.errors().get(Field::Name), Some(&FieldError::Required));
        // The draft survives so the user can correct it.
        assert_eq!(form.draft().price, "899");
    }

    #[test]
    fn setter_clears_only_that_fields_error() {
        let mut store = empty_store();
        let mut form = FormController::default();
        form.set_name("");
        form.set_description("short");

        let outcome = form.submit(&mut store, TODAY, 1000);
        assert_eq!(outcome, SubmitOutcome::Rejected);

        form.set_name("Espresso Grinder");

        assert_eq!(form.errors().get(Field::Name), None);
        assert!(form.errors().get(Field::Description).is_some());
    }

    #[test]
    fn valid_edit_overwrites_in_place_and_resets() -> TestResult {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);
        fill_valid(&mut form);
        form.set_name("Filter Kettle");
        form.submit(&mut store, TODAY, 1001);

        let target = store.get(ProductId(1000)).cloned().ok_or("record should exist")?;
        form.start_edit(&target);

        assert!(form.is_editing());
        assert_eq!(form.draft().name, "Espresso Grinder");

        form.set_stock("77");
        let outcome = form.submit(&mut store, TODAY, 2000);

        assert_eq!(outcome, SubmitOutcome::Updated(ProductId(1000)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(ProductId(1000)).map(|r| r.stock), Some(77));
        // Position preserved: the edited record is still the older one.
        assert_eq!(store.records().last().map(|r| r.id), Some(ProductId(1000)));
        assert!(!form.is_editing());

        Ok(())
    }

    #[test]
    fn edit_may_keep_its_own_name() -> TestResult {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);

        let target = store.get(ProductId(1000)).cloned().ok_or("record should exist")?;
        form.start_edit(&target);
        let outcome = form.submit(&mut store, TODAY, 2000);

        assert_eq!(outcome, SubmitOutcome::Updated(ProductId(1000)));

        Ok(())
    }

    #[test]
    fn cancel_edit_returns_to_a_default_draft() -> TestResult {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);

        let target = store.get(ProductId(1000)).cloned().ok_or("record should exist")?;
        form.start_edit(&target);
        form.cancel_edit();

        assert!(!form.is_editing());
        assert_eq!(form.draft(), &ProductDraft::default());

        Ok(())
    }

    #[test]
    fn confirmed_delete_removes_exactly_that_record() {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);
        fill_valid(&mut form);
        form.set_name("Filter Kettle");
        form.submit(&mut store, TODAY, 1001);

        let outcome = form.delete(&mut store, ProductId(1001), |_| true);

        assert!(matches!(outcome, DeleteOutcome::Removed(removed) if removed.name == "Filter Kettle"));
        assert_eq!(store.len(), 1);
        assert!(store.get(ProductId(1000)).is_some());
    }

    #[test]
    fn declined_delete_is_a_no_op() {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);

        let mut asked_for = None;
        let outcome = form.delete(&mut store, ProductId(1000), |record| {
            asked_for = Some(record.name.clone());
            false
        });

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(asked_for.as_deref(), Some("Espresso Grinder"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn deleting_the_record_being_edited_resets_the_form() -> TestResult {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);

        let target = store.get(ProductId(1000)).cloned().ok_or("record should exist")?;
        form.start_edit(&target);
        form.delete(&mut store, ProductId(1000), |_| true);

        assert!(!form.is_editing());
        assert_eq!(form.draft(), &ProductDraft::default());

        Ok(())
    }

    #[test]
    fn deleting_another_record_keeps_edit_mode() -> TestResult {
        let mut store = empty_store();
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.submit(&mut store, TODAY, 1000);
        fill_valid(&mut form);
        form.set_name("Filter Kettle");
        form.submit(&mut store, TODAY, 1001);

        let target = store.get(ProductId(1000)).cloned().ok_or("record should exist")?;
        form.start_edit(&target);
        form.delete(&mut store, ProductId(1001), |_| true);

        assert!(form.is_editing());
        assert_eq!(form.editing_id(), Some(ProductId(1000)));

        Ok(())
    }

    #[test]
    fn delete_of_unknown_id_never_asks() {
        let mut store = empty_store();
        let mut form = FormController::default();

        let mut asked = false;
        let outcome = form.delete(&mut store, ProductId(404), |_| {
            asked = true;
            true
        });

        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert!(!asked, "confirmation must not run for a missing record");
    }
}
