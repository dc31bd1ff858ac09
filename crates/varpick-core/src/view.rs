//! One render's worth of derived state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::availability::is_available_in;
use crate::catalog::{ImageRef, Product, StockStatus};
use crate::domain::build_domain;
use crate::image::resolve_hover_image;
use crate::matcher::match_variant_indexed;
use crate::pricing::{price_for_match, PriceView};
use crate::selection::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueView {
    pub value: String,
    pub selected: bool,
    /// `false` renders the value struck through and disabled.
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionView {
    pub name: String,
    pub values: Vec<ValueView>,
}

/// Everything the presentation layer reads for one product page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub product_id: String,
    pub dimensions: Vec<DimensionView>,
    /// Index into `product.variants` of the exactly matched variant.
    pub matched_variant: Option<usize>,
    pub price: PriceView,
    /// `None` while the selection does not resolve a single option.
    pub stock_status: Option<StockStatus>,
    pub sku: Option<String>,
    /// Preview for the hovered value; `None` falls back to the product image.
    pub hover_image: Option<ImageRef>,
}

/// Derives the full view of `product` for the selection held in `state`.
///
/// For a product without variants, dimensions are listed for display but
/// every value reports unavailable, since none resolves an option.
#[must_use]
pub fn derive_view(product: &Product, state: &SelectionState, now: DateTime<Utc>) -> ProductView {
    let selection = state.selection();
    let domain = build_domain(product);

    let dimensions = domain
        .dimension_names
        .iter()
        .map(|name| DimensionView {
            name: name.clone(),
            values: domain
                .values(name)
                .iter()
                .map(|value| ValueView {
                    value: value.clone(),
                    selected: selection.get(name) == Some(value.as_str()),
                    available: is_available_in(&product.variants, selection, name, value),
                })
                .collect(),
        })
        .collect();

    // Matched once per render; pricing reuses the result.
    let matched = match_variant_indexed(&product.variants, selection);
    let price = price_for_match(product, selection, matched.map(|(_, v)| v), now);
    let resolved_option = if product.has_variants() {
        matched.map(|(_, v)| &v.option)
    } else {
        Some(&product.option)
    };

    let hover_image = state
        .hovered()
        .and_then(|h| resolve_hover_image(product, selection, &h.name, &h.value));

    ProductView {
        product_id: product.id.clone(),
        dimensions,
        matched_variant: matched.map(|(i, _)| i),
        price,
        stock_status: resolved_option.map(|o| o.stock_status),
        sku: resolved_option.and_then(|o| o.sku.clone()),
        hover_image,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::fixtures::{make_apparel, make_apparel_without_red_m, make_variant};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn value<'a>(view: &'a ProductView, name: &str, value: &str) -> &'a ValueView {
        view.dimensions
            .iter()
            .find(|d| d.name == name)
            .and_then(|d| d.values.iter().find(|v| v.value == value))
            .expect("expected value in view")
    }

    #[test]
    fn empty_selection_view() {
        let product = make_apparel();
        let state = SelectionState::for_product(&product);
        let view = derive_view(&product, &state, now());

        assert_eq!(view.dimensions.len(), 2);
        assert_eq!(view.dimensions[0].name, "Color");
        assert!(view.matched_variant.is_none());
        assert!(view.price.is_range);
        assert!(view.stock_status.is_none());
        assert!(view.dimensions.iter().all(|d| d
            .values
            .iter()
            .all(|v| v.available && !v.selected)));
    }

    #[test]
    fn resolved_selection_exposes_stock_and_sku() {
        let mut product = make_apparel();
        product.variants[1].option.stock_status = StockStatus::OutOfStock;
        product.variants[1].option.sku = Some("TEE-RED-M".to_string());

        let mut state = SelectionState::for_product(&product);
        state.toggle("Color", "Red");
        state.toggle("Size", "M");
        let view = derive_view(&product, &state, now());

        assert_eq!(view.matched_variant, Some(1));
        assert_eq!(view.stock_status, Some(StockStatus::OutOfStock));
        assert_eq!(view.sku.as_deref(), Some("TEE-RED-M"));
        assert!(value(&view, "Color", "Red").selected);
        assert!(!value(&view, "Color", "Blue").selected);
    }

    #[test]
    fn dead_end_values_are_shown_but_unavailable() {
        let product = make_apparel_without_red_m();
        let mut state = SelectionState::for_product(&product);
        state.toggle("Color", "Red");
        let view = derive_view(&product, &state, now());

        let medium = value(&view, "Size", "M");
        assert!(!medium.available);
        assert!(value(&view, "Size", "S").available);
        // Switching colour is always possible.
        assert!(value(&view, "Color", "Blue").available);
    }

    #[test]
    fn hover_pointer_drives_preview_image() {
        let mut product = make_apparel();
        product.variants[2].option.image = Some("/blue.png".to_string());
        let mut state = SelectionState::for_product(&product);

        assert!(derive_view(&product, &state, now()).hover_image.is_none());

        state.hover(Some("Color"), Some("Blue"));
        let view = derive_view(&product, &state, now());
        assert_eq!(view.hover_image.map(|i| i.src).as_deref(), Some("/blue.png"));
        // Hovering never changes price or availability.
        assert!(view.price.is_range);
        assert!(view.matched_variant.is_none());
    }

    #[test]
    fn duplicate_combinations_price_the_first_match() {
        let mut product = make_apparel();
        product
            .variants
            .push(make_variant(&[("Color", "Red"), ("Size", "M")], 400, 4));
        let mut state = SelectionState::for_product(&product);
        state.toggle("Color", "Red");
        state.toggle("Size", "M");
        let view = derive_view(&product, &state, now());

        assert_eq!(view.matched_variant, Some(1));
        assert_eq!(view.price.display_price, 1000);
        assert!(!view.price.is_range);
        assert_eq!(
            view.price,
            crate::pricing::resolve_price_at(&product, state.selection(), now())
        );
    }

    #[test]
    fn single_option_product_resolves_base_option() {
        let mut product = make_apparel();
        product.variants.clear();
        product.option.sku = Some("TEE".to_string());
        let state = SelectionState::for_product(&product);
        let view = derive_view(&product, &state, now());

        assert_eq!(view.stock_status, Some(StockStatus::InStock));
        assert_eq!(view.sku.as_deref(), Some("TEE"));
        assert!(!view.price.is_range);
        assert!(view
            .dimensions
            .iter()
            .flat_map(|d| &d.values)
            .all(|v| !v.available));
    }
}
