//! Read-only catalog snapshot for one product.
//!
//! The snapshot is produced by an external loader (see [`crate::snapshot`] for
//! the file-backed one the CLI uses) and is never mutated by the engine. Any
//! catalog edit produces a new [`Product`] that the engine re-derives against.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inventory state of a sellable option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    OnBackOrder,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "in stock"),
            StockStatus::OutOfStock => write!(f, "out of stock"),
            StockStatus::OnBackOrder => write!(f, "on back order"),
        }
    }
}

/// How an attribute is presented to the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectType {
    #[default]
    Selector,
    Button,
    /// Spec-sheet only; never takes part in variant selection.
    Hidden,
}

/// A concrete sellable configuration, attached either to the product itself
/// or to one of its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    /// Price in minor units; divide by `10^scale` for display.
    pub price: i64,
    /// Number of implied decimal digits in `price` and `sale_price`.
    pub scale: u32,
    #[serde(default)]
    pub sale_price: Option<i64>,
    #[serde(default)]
    pub sale_starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sale_ends_at: Option<DateTime<Utc>>,
    /// ISO 4217 currency code (e.g., `"USD"`).
    pub currency: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub image_title: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub stock_status: StockStatus,
}

impl ProductOption {
    /// Returns the sale price if one is set and `now` falls inside the sale
    /// window. Missing window bounds are open; the end bound is exclusive.
    #[must_use]
    pub fn active_sale_price(&self, now: DateTime<Utc>) -> Option<i64> {
        let sale_price = self.sale_price?;
        if self.sale_starts_at.is_some_and(|start| now < start) {
            return None;
        }
        if self.sale_ends_at.is_some_and(|end| now >= end) {
            return None;
        }
        Some(sale_price)
    }

    /// The price a customer pays at `now`: the active sale price, else `price`.
    #[must_use]
    pub fn effective_price(&self, now: DateTime<Utc>) -> i64 {
        self.active_sale_price(now).unwrap_or(self.price)
    }

    /// `true` only when an active sale price is strictly below `price`.
    #[must_use]
    pub fn has_discount(&self, now: DateTime<Utc>) -> bool {
        self.active_sale_price(now)
            .is_some_and(|sale| sale < self.price)
    }

    /// Image fields of this option, if it carries an image.
    #[must_use]
    pub fn image_ref(&self) -> Option<ImageRef> {
        self.image.as_ref().map(|src| ImageRef {
            src: src.clone(),
            alt: self.image_alt.clone(),
            title: self.image_title.clone(),
        })
    }
}

/// Image fields copied from a [`ProductOption`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
}

/// A dimension definition, e.g. `Color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// `None` for spec-only entries that never drive variant selection.
    #[serde(default)]
    pub name: Option<String>,
    /// A literal value, or a `|`-delimited list when the product has no variants.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub select_type: SelectType,
}

impl Attribute {
    /// Returns the attribute name when it can take part in variant selection.
    #[must_use]
    pub fn selectable_name(&self) -> Option<&str> {
        match self.select_type {
            SelectType::Hidden => None,
            SelectType::Selector | SelectType::Button => self.name.as_deref(),
        }
    }

    /// Splits `value` on `|`, trimming whitespace and dropping empty pieces.
    #[must_use]
    pub fn listed_values(&self) -> Vec<String> {
        self.value
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// One concrete point in the attribute space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Attribute name to value. Only the dimensions this variant varies along.
    pub combination: BTreeMap<String, String>,
    pub option: ProductOption,
    /// Tie-break for hover image resolution.
    #[serde(default)]
    pub order: i32,
}

/// One product snapshot: base option, attribute definitions, and variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Snapshot identity; a change resets any bound selection state.
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub option: ProductOption,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Returns `true` when the product is sold through variants rather than
    /// through its base option.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Looks up a selectable attribute definition by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
    }
}
