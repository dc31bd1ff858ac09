//! Selectable dimensions and their value domains.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Product;

/// Ordered dimension names plus the values each one can take.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDomain {
    /// Ordered by the attribute's `order`, ascending.
    pub dimension_names: Vec<String>,
    /// Values in first-observed order, deduplicated.
    pub values_by_dimension: BTreeMap<String, Vec<String>>,
}

impl AttributeDomain {
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.values_by_dimension
            .get(name)
            .map_or(&[], Vec::as_slice)
    }
}

/// Derives the selectable dimensions of `product`.
///
/// With variants, the value domain is read from the variant combinations, so
/// only values that resolve to a sellable option appear. An attribute that no
/// combination mentions is spec-only for this product and is left out.
///
/// Without variants, each selectable attribute's `|`-delimited `value` is
/// listed. Those values are descriptive; they never resolve an option.
#[must_use]
pub fn build_domain(product: &Product) -> AttributeDomain {
    let mut attributes: Vec<(i32, &str)> = product
        .attributes
        .iter()
        .filter_map(|a| a.selectable_name().map(|name| (a.order, name)))
        .collect();
    // Stable sort keeps declaration order among equal `order` values.
    attributes.sort_by_key(|(order, _)| *order);

    let mut domain = AttributeDomain::default();

    if !product.has_variants() {
        for (_, name) in attributes {
            if domain.values_by_dimension.contains_key(name) {
                continue;
            }
            let values = product
                .attribute(name)
                .map(crate::catalog::Attribute::listed_values)
                .unwrap_or_default();
            domain.dimension_names.push(name.to_string());
            domain.values_by_dimension.insert(name.to_string(), values);
        }
        return domain;
    }

    let mut observed: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for variant in &product.variants {
        for (key, value) in &variant.combination {
            let values = observed.entry(key.as_str()).or_default();
            if !values.contains(&value.as_str()) {
                values.push(value.as_str());
            }
        }
    }

    for (_, name) in attributes {
        let Some(values) = observed.get(name) else {
            tracing::trace!(attribute = name, "attribute not used by any variant");
            continue;
        };
        if domain.values_by_dimension.contains_key(name) {
            continue;
        }
        domain.dimension_names.push(name.to_string());
        domain.values_by_dimension.insert(
            name.to_string(),
            values.iter().map(|v| (*v).to_string()).collect(),
        );
    }

    domain
}
