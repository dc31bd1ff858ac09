//! Plain-text rendering of engine output.

use std::fmt::Write as _;

use varpick_core::{AttributeDomain, Product, ProductView};

/// One line per dimension, e.g. `Color: Red, Blue`.
pub(crate) fn domain(product: &Product, domain: &AttributeDomain) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", display_name(product), product.id);
    if domain.dimension_names.is_empty() {
        out.push_str("no selectable dimensions\n");
    }
    for name in &domain.dimension_names {
        let _ = writeln!(out, "{name}: {}", domain.values(name).join(", "));
    }
    out
}

/// Dimensions with selected values in brackets and unavailable values
/// struck with `~`, followed by price, stock, and preview lines.
pub(crate) fn view(product: &Product, view: &ProductView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", display_name(product), view.product_id);

    for dimension in &view.dimensions {
        let values: Vec<String> = dimension
            .values
            .iter()
            .map(|v| match (v.selected, v.available) {
                (true, _) => format!("[{}]", v.value),
                (false, true) => v.value.clone(),
                (false, false) => format!("~{}~", v.value),
            })
            .collect();
        let _ = writeln!(out, "{:<12}{}", dimension.name, values.join("  "));
    }

    let _ = writeln!(out, "{:<12}{}", "Price", view.price.format());
    let stock = view
        .stock_status
        .map_or_else(|| "\u{2014}".to_string(), |s| s.to_string());
    let _ = writeln!(out, "{:<12}{stock}", "Stock");
    if let Some(sku) = &view.sku {
        let _ = writeln!(out, "{:<12}{sku}", "SKU");
    }
    if let Some(image) = &view.hover_image {
        let _ = writeln!(out, "{:<12}{}", "Preview", image.src);
    }
    out
}

fn display_name(product: &Product) -> &str {
    if product.name.is_empty() {
        &product.id
    } else {
        &product.name
    }
}
