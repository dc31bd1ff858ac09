//! Catalog builders shared by unit tests.

use std::collections::BTreeMap;

use crate::catalog::{Attribute, Product, ProductOption, SelectType, StockStatus, Variant};

pub(crate) fn make_option(price: i64, sale_price: Option<i64>) -> ProductOption {
    ProductOption {
        price,
        scale: 2,
        sale_price,
        sale_starts_at: None,
        sale_ends_at: None,
        currency: "USD".to_string(),
        image: None,
        image_alt: None,
        image_title: None,
        sku: None,
        stock_status: StockStatus::InStock,
    }
}

pub(crate) fn make_attribute(name: &str, value: &str, order: i32) -> Attribute {
    Attribute {
        name: Some(name.to_string()),
        value: value.to_string(),
        order,
        select_type: SelectType::Button,
    }
}

pub(crate) fn make_variant(pairs: &[(&str, &str)], price: i64, order: i32) -> Variant {
    Variant {
        combination: pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<BTreeMap<_, _>>(),
        option: make_option(price, None),
        order,
    }
}

/// Color x Size, every combination present, all priced 1000.
pub(crate) fn make_apparel() -> Product {
    Product {
        id: "tee".to_string(),
        name: "Basic Tee".to_string(),
        option: make_option(1000, None),
        attributes: vec![
            make_attribute("Size", "S|M", 1),
            make_attribute("Color", "Red|Blue", 0),
        ],
        variants: vec![
            make_variant(&[("Color", "Red"), ("Size", "S")], 1000, 0),
            make_variant(&[("Color", "Red"), ("Size", "M")], 1000, 1),
            make_variant(&[("Color", "Blue"), ("Size", "S")], 1000, 2),
            make_variant(&[("Color", "Blue"), ("Size", "M")], 1000, 3),
        ],
    }
}

/// Same as [`make_apparel`] but without the `(Red, M)` variant.
pub(crate) fn make_apparel_without_red_m() -> Product {
    let mut product = make_apparel();
    product.variants.remove(1);
    product
}
