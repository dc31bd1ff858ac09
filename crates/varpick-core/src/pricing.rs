//! Display price for the current selection.
//!
//! Three branches:
//!
//! - **No variants**: the base option is priced directly, discount included.
//! - **Exact match**: the matched variant's option is priced directly.
//! - **Partial or empty selection**: "starting at" pricing. The display price
//!   is the lowest effective price among the variants still consistent with
//!   the selection. A range never shows a discount or an original price.
//!
//! Prices stay as raw minor-unit integers together with their `scale` and
//! `currency`; [`PriceView::display_amount`] divides by `10^scale`. Variants
//! are compared by decimal amount, so a mix of scales still finds the
//! cheapest one.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use std::cmp::Ordering;

use crate::catalog::{Product, ProductOption, Variant};
use crate::matcher::{filter_variants, match_variant};
use crate::selection::Selection;

/// Price information handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceView {
    /// Minor units.
    pub display_price: i64,
    pub has_discount: bool,
    /// Minor units. Only set when `has_discount` is, so it can be struck through.
    pub display_original_price: Option<i64>,
    pub scale: u32,
    pub currency: String,
    /// `true` on the "starting at" branch.
    pub is_range: bool,
}

impl PriceView {
    fn exact(option: &ProductOption, now: DateTime<Utc>) -> Self {
        let has_discount = option.has_discount(now);
        Self {
            display_price: option.effective_price(now),
            has_discount,
            display_original_price: has_discount.then_some(option.price),
            scale: option.scale,
            currency: option.currency.clone(),
            is_range: false,
        }
    }

    fn starting_at(option: &ProductOption, now: DateTime<Utc>) -> Self {
        Self {
            display_price: option.effective_price(now),
            has_discount: false,
            display_original_price: None,
            scale: option.scale,
            currency: option.currency.clone(),
            is_range: true,
        }
    }

    /// `display_price` as a decimal amount. `None` if `scale` exceeds what
    /// [`Decimal`] can represent.
    #[must_use]
    pub fn display_amount(&self) -> Option<Decimal> {
        to_amount(self.display_price, self.scale)
    }

    /// `display_original_price` as a decimal amount.
    #[must_use]
    pub fn original_amount(&self) -> Option<Decimal> {
        self.display_original_price
            .and_then(|raw| to_amount(raw, self.scale))
    }

    /// Human-readable price, e.g. `"from 10.00 USD"` or `"8.00 USD (was 10.00 USD)"`.
    #[must_use]
    pub fn format(&self) -> String {
        let amount = format_amount(self.display_price, self.scale, &self.currency);
        if self.is_range {
            return format!("from {amount}");
        }
        match self.display_original_price {
            Some(original) => format!(
                "{amount} (was {})",
                format_amount(original, self.scale, &self.currency)
            ),
            None => amount,
        }
    }
}

fn to_amount(raw: i64, scale: u32) -> Option<Decimal> {
    Decimal::try_new(raw, scale).ok()
}

fn format_amount(raw: i64, scale: u32, currency: &str) -> String {
    match to_amount(raw, scale) {
        Some(amount) => format!("{amount} {currency}"),
        None => format!("{raw}e-{scale} {currency}"),
    }
}

/// Resolves the display price for `selection` at the current instant.
#[must_use]
pub fn resolve_price(product: &Product, selection: &Selection) -> PriceView {
    resolve_price_at(product, selection, Utc::now())
}

/// Resolves the display price for `selection`, evaluating sale windows at `now`.
///
/// When the selection contradicts every variant, the base option is shown as
/// a "starting at" price.
#[must_use]
pub fn resolve_price_at(
    product: &Product,
    selection: &Selection,
    now: DateTime<Utc>,
) -> PriceView {
    price_for_match(product, selection, match_variant(product, selection), now)
}

/// Same as [`resolve_price_at`] for a caller that already ran the matcher.
#[must_use]
pub(crate) fn price_for_match(
    product: &Product,
    selection: &Selection,
    matched: Option<&Variant>,
    now: DateTime<Utc>,
) -> PriceView {
    if !product.has_variants() {
        return PriceView::exact(&product.option, now);
    }

    if let Some(variant) = matched {
        return PriceView::exact(&variant.option, now);
    }

    // First variant wins among equal prices.
    let cheapest = filter_variants(product, selection)
        .into_iter()
        .map(|v| &v.option)
        .reduce(|best, option| {
            if compare_effective(option, best, now) == Ordering::Less {
                option
            } else {
                best
            }
        });

    match cheapest {
        Some(option) => PriceView::starting_at(option, now),
        None => {
            tracing::debug!(
                product = %product.id,
                "selection matches no variant, showing base price"
            );
            PriceView::starting_at(&product.option, now)
        }
    }
}

/// Orders two options by effective amount. An amount whose scale
/// [`Decimal`] cannot hold sorts after every representable one.
fn compare_effective(a: &ProductOption, b: &ProductOption, now: DateTime<Utc>) -> Ordering {
    let amount = |o: &ProductOption| to_amount(o.effective_price(now), o.scale);
    match (amount(a), amount(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.effective_price(now).cmp(&b.effective_price(now)),
    }
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
