//! Whether an attribute value can still lead to a sellable variant.
//!
//! Unavailable values are shown but disabled by the presentation layer, so the
//! customer can see the option exists yet conflicts with the rest of the
//! selection.

use crate::catalog::{Product, Variant};
use crate::matcher::is_consistent;
use crate::selection::Selection;

/// Checks `name = value` against `variants`, overriding any value already
/// selected for `name`. Recomputed on every call.
#[must_use]
pub fn is_available_in(
    variants: &[Variant],
    selection: &Selection,
    name: &str,
    value: &str,
) -> bool {
    let hypothetical = selection.with(name, value);
    variants.iter().any(|v| is_consistent(v, &hypothetical))
}

/// Returns `true` when selecting `name = value` on top of `selection` leaves
/// at least one variant of `product`.
///
/// A product without variants has nothing to resolve, so every value reports
/// unavailable; its listed attribute values are descriptive only.
#[must_use]
pub fn is_attribute_value_available(
    product: &Product,
    selection: &Selection,
    name: &str,
    value: &str,
) -> bool {
    is_available_in(&product.variants, selection, name, value)
}
