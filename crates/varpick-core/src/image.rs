//! Preview image for a hovered attribute value.

use crate::catalog::{ImageRef, Product, Variant};
use crate::matcher::filter_variants_in;
use crate::selection::Selection;

/// Picks the image of the lowest-`order` variant reachable with
/// `name = value` applied on top of `selection`. Variants without an image
/// are skipped; equal `order` keeps list order.
#[must_use]
pub fn image_for(
    variants: &[Variant],
    selection: &Selection,
    name: &str,
    value: &str,
) -> Option<ImageRef> {
    let hypothetical = selection.with(name, value);
    let mut candidates = filter_variants_in(variants, &hypothetical);
    candidates.sort_by_key(|v| v.order);
    candidates.into_iter().find_map(|v| v.option.image_ref())
}

/// Hover preview for `product`. `None` means the caller shows the base
/// product image.
#[must_use]
pub fn resolve_hover_image(
    product: &Product,
    selection: &Selection,
    name: &str,
    value: &str,
) -> Option<ImageRef> {
    image_for(&product.variants, selection, name, value)
}
