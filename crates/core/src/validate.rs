//! Draft validation.
//!
//! [`validate`] inspects every field independently and collects at most one
//! error per field; an empty result means the draft may be committed. The
//! function is pure: it borrows the draft and the current records and
//! mutates neither.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::products::{Category, Product, ProductDraft, ProductId};

/// Maximum length of a product name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Minimum length of a trimmed description, in characters.
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Minimum price.
pub const PRICE_MIN: i64 = 1;

/// Minimum stock level.
pub const STOCK_MIN: i64 = 0;

/// Maximum stock level.
pub const STOCK_MAX: i64 = 9999;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Product name input.
    Name,

    /// Description input.
    Description,

    /// Price input.
    Price,

    /// Category selector.
    Category,

    /// Release date picker.
    ReleaseDate,

    /// Stock input.
    Stock,
}

/// Closed catalog of per-field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field is empty or nothing is selected.
    #[error("this field is required")]
    Required,

    /// Fewer characters than the stated minimum.
    #[error("must be at least {0} characters")]
    TooShort(usize),

    /// More characters than the stated maximum.
    #[error("must be at most {0} characters")]
    TooLong(usize),

    /// Missing, unparsable or smaller than the stated minimum.
    #[error("must be at least {0}")]
    BelowMinimum(i64),

    /// Larger than the stated maximum.
    #[error("must be at most {0}")]
    AboveMaximum(i64),

    /// Another record already uses this name.
    #[error("this name is already taken")]
    NotUnique,

    /// The date lies after today.
    #[error("cannot be in the future")]
    InFuture,
}

/// Field -> error map produced by [`validate`]. Absence of a field means that
/// field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: FxHashMap<Field, FieldError>,
}

impl ValidationErrors {
    /// True when every field validated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// The error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.by_field.get(&field)
    }

    /// The display message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.by_field.get(&field).map(ToString::to_string)
    }

    /// Drop the error recorded for `field`, keeping the rest.
    pub fn clear(&mut self, field: Field) {
        self.by_field.remove(&field);
    }

    fn set(&mut self, field: Field, error: FieldError) {
        self.by_field.insert(field, error);
    }
}

/// Validate a draft against the current records.
///
/// Every rule runs; nothing short-circuits across fields. `editing_id`
/// excludes the record currently being edited from the name-uniqueness
/// check so a record never collides with itself.
#[must_use]
pub fn validate(
    draft: &ProductDraft,
    records: &[Product],
    editing_id: Option<ProductId>,
    today: Date,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.set(Field::Name, FieldError::Required);
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.set(Field::Name, FieldError::TooLong(NAME_MAX_CHARS));
    }

    if draft.description.trim().chars().count() < DESCRIPTION_MIN_CHARS {
        errors.set(Field::Description, FieldError::TooShort(DESCRIPTION_MIN_CHARS));
    }

    let price = draft.price.trim();
    if price.is_empty() {
        errors.set(Field::Price, FieldError::Required);
    } else {
        match price.parse::<i64>() {
            Ok(value) if value >= PRICE_MIN => {}
            Ok(_) | Err(_) => errors.set(Field::Price, FieldError::BelowMinimum(PRICE_MIN)),
        }
    }

    if draft.category.trim().parse::<Category>().is_err() {
        errors.set(Field::Category, FieldError::Required);
    }

    match draft.release_date.trim().parse::<Date>() {
        Err(_) => errors.set(Field::ReleaseDate, FieldError::Required),
        Ok(date) if date > today => errors.set(Field::ReleaseDate, FieldError::InFuture),
        Ok(_) => {}
    }

    let stock = draft.stock.trim();
    if stock.is_empty() {
        errors.set(Field::Stock, FieldError::Required);
    } else {
        match stock.parse::<i64>() {
            Ok(value) if value > STOCK_MAX => {
                errors.set(Field::Stock, FieldError::AboveMaximum(STOCK_MAX));
            }
            Ok(value) if value >= STOCK_MIN => {}
            Ok(_) | Err(_) => errors.set(Field::Stock, FieldError::BelowMinimum(STOCK_MIN)),
        }
    }

    // Uniqueness runs last so it replaces a length error on the same field.
    if !name.is_empty() {
        let lowered = name.to_lowercase();
        let duplicate = records.iter().any(|record| {
            Some(record.id) != editing_id && record.name.to_lowercase() == lowered
        });

        if duplicate {
            errors.set(Field::Name, FieldError::NotUnique);
        }
    }

    errors
}
