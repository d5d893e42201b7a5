//! Product records and form drafts.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a product record, unique within one catalog and immutable
/// once assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Consumer electronics.
    Electronics,

    /// Apparel.
    Clothing,

    /// Food.
    Food,

    /// Drinks.
    Beverages,

    /// Household goods.
    Household,

    /// Beauty and personal care.
    Beauty,
}

impl Category {
    /// Every selectable category, in display order.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Clothing,
        Self::Food,
        Self::Beverages,
        Self::Household,
        Self::Beauty,
    ];

    /// Human-readable label; also the serialized and parsed form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Food => "Food",
            Self::Beverages => "Beverages",
            Self::Household => "Household",
            Self::Beauty => "Beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|category| category.label() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single catalog entry. The persisted blob holds these serialized with
/// camelCase keys (`releaseDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, immutable identifier.
    pub id: ProductId,

    /// Display name, trimmed, unique case-insensitively among records.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Unit price in whole currency units.
    pub price: i64,

    /// Category from the closed set.
    pub category: Category,

    /// Release date, never in the future.
    pub release_date: Date,

    /// Units in stock.
    pub stock: i64,

    /// Whether the product is currently sold.
    pub active: bool,
}

/// Raw, unvalidated form values as the user typed them.
///
/// Numeric, date and category fields stay strings until a submit coerces
/// them; only then does the draft become a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    /// Name input.
    pub name: String,

    /// Description input.
    pub description: String,

    /// Price input.
    pub price: String,

    /// Selected category label, empty when nothing is selected.
    pub category: String,

    /// Release date input as an ISO `YYYY-MM-DD` string.
    pub release_date: String,

    /// Stock input.
    pub stock: String,

    /// Active toggle.
    pub active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            release_date: String::new(),
            stock: "0".to_string(),
            active: true,
        }
    }
}

impl ProductDraft {
    /// Draft pre-filled from an existing record, as shown when editing it.
    #[must_use]
    pub fn from_record(record: &Product) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price.to_string(),
            category: record.category.to_string(),
            release_date: record.release_date.to_string(),
            stock: record.stock.to_string(),
            active: record.active,
        }
    }

    /// Coerce the draft into a record with the given id: name and
    /// description trimmed, price/stock/date/category parsed.
    ///
    /// Returns `None` when any field does not parse; a draft that passed
    /// validation always does.
    #[must_use]
    pub fn to_record(&self, id: ProductId) -> Option<Product> {
        Some(Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price.trim().parse().ok()?,
            category: self.category.trim().parse().ok()?,
            release_date: self.release_date.trim().parse().ok()?,
            stock: self.stock.trim().parse().ok()?,
            active: self.active,
        })
    }
}
