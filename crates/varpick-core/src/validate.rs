//! Consistency checks over a catalog snapshot.
//!
//! The engine tolerates every issue reported here; these checks exist so
//! bad data can be surfaced to catalog editors instead of silently producing
//! surprising first-match or range results.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::catalog::{Product, SelectType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("variants {first} and {second} have identical combinations; variant {first} wins")]
    DuplicateCombination { first: usize, second: usize },

    #[error("variant {variant} uses key \"{key}\" which is not an attribute of the product")]
    UnknownAttributeKey { variant: usize, key: String },

    #[error("variant {variant} varies along hidden attribute \"{key}\"")]
    HiddenAttributeInCombination { variant: usize, key: String },

    #[error("variants do not share one set of combination keys")]
    MixedKeySets,

    #[error("variants are priced in more than one currency: {0:?}")]
    MixedCurrencies(Vec<String>),

    #[error("variants are priced at more than one scale: {0:?}")]
    MixedScales(Vec<u32>),

    #[error("{} has a sale price that is not below its price", describe(.variant))]
    SaleNotBelowPrice { variant: Option<usize> },
}

#[allow(clippy::ref_option)]
fn describe(variant: &Option<usize>) -> String {
    variant.map_or_else(|| "base option".to_string(), |i| format!("variant {i}"))
}

/// Runs every check and returns the issues found, in a stable order.
#[must_use]
pub fn validate_product(product: &Product) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    check_duplicates(product, &mut issues);
    check_keys(product, &mut issues);
    check_key_sets(product, &mut issues);
    check_currencies(product, &mut issues);
    check_scales(product, &mut issues);
    check_sale_prices(product, &mut issues);

    issues
}

fn check_duplicates(product: &Product, issues: &mut Vec<CatalogIssue>) {
    let mut seen: BTreeMap<_, usize> = BTreeMap::new();
    for (index, variant) in product.variants.iter().enumerate() {
        if let Some(&first) = seen.get(&variant.combination) {
            issues.push(CatalogIssue::DuplicateCombination {
                first,
                second: index,
            });
        } else {
            seen.insert(&variant.combination, index);
        }
    }
}

fn check_keys(product: &Product, issues: &mut Vec<CatalogIssue>) {
    for (index, variant) in product.variants.iter().enumerate() {
        for key in variant.combination.keys() {
            match product.attribute(key) {
                None => issues.push(CatalogIssue::UnknownAttributeKey {
                    variant: index,
                    key: key.clone(),
                }),
                Some(attribute) if attribute.select_type == SelectType::Hidden => {
                    issues.push(CatalogIssue::HiddenAttributeInCombination {
                        variant: index,
                        key: key.clone(),
                    });
                }
                Some(_) => {}
            }
        }
    }
}

fn check_key_sets(product: &Product, issues: &mut Vec<CatalogIssue>) {
    let key_sets: BTreeSet<Vec<&String>> = product
        .variants
        .iter()
        .map(|v| v.combination.keys().collect())
        .collect();
    if key_sets.len() > 1 {
        issues.push(CatalogIssue::MixedKeySets);
    }
}

fn check_currencies(product: &Product, issues: &mut Vec<CatalogIssue>) {
    let currencies: BTreeSet<&str> = product
        .variants
        .iter()
        .map(|v| v.option.currency.as_str())
        .collect();
    if currencies.len() > 1 {
        issues.push(CatalogIssue::MixedCurrencies(
            currencies.into_iter().map(str::to_string).collect(),
        ));
    }
}

fn check_scales(product: &Product, issues: &mut Vec<CatalogIssue>) {
    let scales: BTreeSet<u32> = product.variants.iter().map(|v| v.option.scale).collect();
    if scales.len() > 1 {
        issues.push(CatalogIssue::MixedScales(scales.into_iter().collect()));
    }
}

fn check_sale_prices(product: &Product, issues: &mut Vec<CatalogIssue>) {
    let options = std::iter::once((None, &product.option)).chain(
        product
            .variants
            .iter()
            .enumerate()
            .map(|(i, v)| (Some(i), &v.option)),
    );
    for (variant, option) in options {
        if option.sale_price.is_some_and(|sale| sale >= option.price) {
            issues.push(CatalogIssue::SaleNotBelowPrice { variant });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{make_apparel, make_variant};

    #[test]
    fn clean_catalog_has_no_issues() {
        assert!(validate_product(&make_apparel()).is_empty());
    }

    #[test]
    fn reports_duplicate_combinations() {
        let mut product = make_apparel();
        product
            .variants
            .push(make_variant(&[("Color", "Red"), ("Size", "M")], 900, 9));
        assert_eq!(
            validate_product(&product),
            vec![CatalogIssue::DuplicateCombination {
                first: 1,
                second: 4
            }]
        );
    }

    #[test]
    fn reports_unknown_key_and_mixed_key_sets() {
        let mut product = make_apparel();
        product.variants[0]
            .combination
            .insert("Fit".to_string(), "Slim".to_string());
        let issues = validate_product(&product);
        assert!(issues.contains(&CatalogIssue::UnknownAttributeKey {
            variant: 0,
            key: "Fit".to_string()
        }));
        assert!(issues.contains(&CatalogIssue::MixedKeySets));
    }

    #[test]
    fn reports_hidden_attribute_in_combination() {
        let mut product = make_apparel();
        product.attributes[1].select_type = SelectType::Hidden;
        let issues = validate_product(&product);
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|i| matches!(
            i,
            CatalogIssue::HiddenAttributeInCombination { key, .. } if key == "Color"
        )));
    }

    #[test]
    fn reports_mixed_currencies() {
        let mut product = make_apparel();
        product.variants[3].option.currency = "EUR".to_string();
        assert_eq!(
            validate_product(&product),
            vec![CatalogIssue::MixedCurrencies(vec![
                "EUR".to_string(),
                "USD".to_string()
            ])]
        );
    }

    #[test]
    fn reports_mixed_scales() {
        let mut product = make_apparel();
        product.variants[0].option.scale = 1;
        product.variants[0].option.price = 100;
        let issues = validate_product(&product);
        assert_eq!(issues, vec![CatalogIssue::MixedScales(vec![1, 2])]);
        assert_eq!(
            issues[0].to_string(),
            "variants are priced at more than one scale: [1, 2]"
        );
    }

    #[test]
    fn reports_sale_not_below_price() {
        let mut product = make_apparel();
        product.option.sale_price = Some(1000);
        product.variants[2].option.sale_price = Some(1500);
        let issues = validate_product(&product);
        assert_eq!(
            issues,
            vec![
                CatalogIssue::SaleNotBelowPrice { variant: None },
                CatalogIssue::SaleNotBelowPrice { variant: Some(2) },
            ]
        );
        assert_eq!(
            issues[0].to_string(),
            "base option has a sale price that is not below its price"
        );
        assert_eq!(
            issues[1].to_string(),
            "variant 2 has a sale price that is not below its price"
        );
    }
}
