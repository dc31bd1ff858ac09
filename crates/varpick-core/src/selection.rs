//! The customer's partial choice across dimensions, and the container that
//! owns it for one product page or editor session.
//!
//! [`Selection`] is a plain value: every derivation in this crate takes it by
//! reference. [`SelectionState`] is the only mutable piece and must stay with
//! a single owner (one request or session); it is never shared.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A partial mapping from attribute name to chosen value. At most one value
/// per attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deselects `name` if it is currently set to `value`, otherwise sets it.
    pub fn toggle(&mut self, name: &str, value: &str) {
        if self.get(name) == Some(value) {
            self.0.remove(name);
        } else {
            self.0.insert(name.to_string(), value.to_string());
        }
    }

    /// Returns a hypothetical copy with `name` forced to `value`, overriding
    /// any prior value for that attribute.
    #[must_use]
    pub fn with(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.0.insert(name.to_string(), value.to_string());
        next
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Pure form of [`Selection::toggle`].
#[must_use]
pub fn toggle_selection(selection: &Selection, name: &str, value: &str) -> Selection {
    let mut next = selection.clone();
    next.toggle(name, value);
    next
}

/// The empty selection.
#[must_use]
pub fn reset_selection() -> Selection {
    Selection::new()
}

/// Transient preview pointer; only the hover image query reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    pub name: String,
    pub value: String,
}

/// Selection container for one presentation session.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    product_id: Option<String>,
    selection: Selection,
    hover: Option<Hover>,
}

impl SelectionState {
    /// Creates a container bound to `product`.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: Some(product.id.clone()),
            ..Self::default()
        }
    }

    /// Binds the container to `product`. When the snapshot identity differs
    /// from the one previously bound, selection and hover are cleared so
    /// attribute names from another product cannot leak.
    ///
    /// Returns `true` if the state was reset.
    pub fn bind(&mut self, product: &Product) -> bool {
        if self.product_id.as_deref() == Some(product.id.as_str()) {
            return false;
        }
        tracing::debug!(
            from = ?self.product_id,
            to = %product.id,
            "product snapshot changed, resetting selection"
        );
        self.reset();
        self.product_id = Some(product.id.clone());
        true
    }

    pub fn toggle(&mut self, name: &str, value: &str) {
        self.selection.toggle(name, value);
    }

    pub fn reset(&mut self) {
        self.selection.clear();
        self.hover = None;
    }

    /// Sets the hover pointer, or clears it when either part is `None`.
    pub fn hover(&mut self, name: Option<&str>, value: Option<&str>) {
        self.hover = match (name, value) {
            (Some(name), Some(value)) => Some(Hover {
                name: name.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        };
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
