//! Matching a partial selection against a product's variants.
//!
//! Both functions work on raw combination keys, not on the curated
//! [`crate::domain::AttributeDomain`], so a key with no attribute definition
//! still constrains matching.
//!
//! Ties are broken by list order: the first matching variant wins. Callers
//! must keep variants in a `Vec` (or other ordered container) for this to
//! hold.

use crate::catalog::{Product, Variant};
use crate::selection::Selection;

/// `true` when every key of the variant's combination is selected with the
/// same value. Extra selected keys are ignored.
#[must_use]
pub fn covers(variant: &Variant, selection: &Selection) -> bool {
    variant
        .combination
        .iter()
        .all(|(key, value)| selection.get(key) == Some(value.as_str()))
}

/// `true` when no selected key contradicts the variant's combination.
#[must_use]
pub fn is_consistent(variant: &Variant, selection: &Selection) -> bool {
    selection.iter().all(|(key, value)| {
        variant
            .combination
            .get(key)
            .is_none_or(|own| own == value)
    })
}

/// Returns the first variant fully covered by `selection`, with its index.
#[must_use]
pub fn match_variant_indexed<'a>(
    variants: &'a [Variant],
    selection: &Selection,
) -> Option<(usize, &'a Variant)> {
    let mut matches = variants
        .iter()
        .enumerate()
        .filter(|(_, v)| covers(v, selection));
    let first = matches.next()?;
    let extra = matches.count();
    if extra > 0 {
        tracing::warn!(
            index = first.0,
            extra,
            "multiple variants match the selection; using the first"
        );
    }
    Some(first)
}

/// Returns the first variant of `product` fully covered by `selection`.
///
/// A product without variants never matches; callers fall back to the base
/// option.
#[must_use]
pub fn match_variant<'a>(product: &'a Product, selection: &Selection) -> Option<&'a Variant> {
    match_variant_indexed(&product.variants, selection).map(|(_, v)| v)
}

/// All variants consistent with `selection`, in list order. An empty
/// selection keeps every variant.
#[must_use]
pub fn filter_variants_in<'a>(variants: &'a [Variant], selection: &Selection) -> Vec<&'a Variant> {
    variants
        .iter()
        .filter(|v| is_consistent(v, selection))
        .collect()
}

/// All variants of `product` consistent with `selection`.
#[must_use]
pub fn filter_variants<'a>(product: &'a Product, selection: &Selection) -> Vec<&'a Variant> {
    filter_variants_in(&product.variants, selection)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
