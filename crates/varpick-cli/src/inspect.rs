//! Command handlers for the CLI.
//!
//! Each handler loads one product snapshot, replays the requested toggles into
//! a fresh [`SelectionState`], and prints what the engine derives.

use anyhow::Context;
use clap::Args;
use varpick_core::{AppConfig, Product, SelectionState};

use crate::render;

/// Selections applied in order, each as a toggle.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Toggle an attribute value, as NAME=VALUE; repeatable
    #[arg(long = "select", value_parser = parse_pair)]
    pub select: Vec<(String, String)>,
}

impl SelectionArgs {
    fn apply(&self, product: &Product) -> SelectionState {
        let mut state = SelectionState::for_product(product);
        for (name, value) in &self.select {
            state.toggle(name, value);
        }
        state
    }
}

/// Parse a `NAME=VALUE` argument. Only the first `=` separates, so values
/// may contain `=`.
pub(crate) fn parse_pair(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got \"{raw}\""))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("attribute name is empty in \"{raw}\""));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Resolve and load a snapshot, logging validation issues. In strict mode a
/// snapshot with any issue is refused.
pub(crate) fn load_snapshot(config: &AppConfig, reference: &str) -> anyhow::Result<Product> {
    let product = load_unchecked(config, reference)?;

    let issues = varpick_core::validate_product(&product);
    for issue in &issues {
        tracing::warn!(product = %product.id, "{issue}");
    }
    if config.strict_validation && !issues.is_empty() {
        anyhow::bail!(
            "product '{}' has {} catalog issue(s); run `validate` for details",
            product.id,
            issues.len()
        );
    }

    Ok(product)
}

fn load_unchecked(config: &AppConfig, reference: &str) -> anyhow::Result<Product> {
    let path = varpick_core::resolve_snapshot_path(reference, &config.catalog_dir)?;
    varpick_core::load_product(&path)
        .with_context(|| format!("loading product snapshot for '{reference}'"))
}

/// Print the selectable dimensions of a product.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub(crate) fn run_domain(config: &AppConfig, reference: &str) -> anyhow::Result<()> {
    let product = load_snapshot(config, reference)?;
    let domain = varpick_core::build_domain(&product);
    print!("{}", render::domain(&product, &domain));
    Ok(())
}

/// Print the full derived view for the given selections.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or the view cannot be
/// serialized.
pub(crate) fn run_view(
    config: &AppConfig,
    reference: &str,
    selection: &SelectionArgs,
    hover: Option<&(String, String)>,
    json: bool,
) -> anyhow::Result<()> {
    let product = load_snapshot(config, reference)?;
    let mut state = selection.apply(&product);
    if let Some((name, value)) = hover {
        state.hover(Some(name), Some(value));
    }

    let view = varpick_core::derive_view(&product, &state, config.now());
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::view(&product, &view));
    }
    Ok(())
}

/// Print whether `attribute = value` is reachable from the given selections.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub(crate) fn run_available(
    config: &AppConfig,
    reference: &str,
    selection: &SelectionArgs,
    attribute: &str,
    value: &str,
) -> anyhow::Result<()> {
    let product = load_snapshot(config, reference)?;
    let state = selection.apply(&product);
    let available =
        varpick_core::is_attribute_value_available(&product, state.selection(), attribute, value);
    println!(
        "{attribute}={value}: {}",
        if available { "available" } else { "unavailable" }
    );
    Ok(())
}

/// Print the resolved display price for the given selections.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub(crate) fn run_price(
    config: &AppConfig,
    reference: &str,
    selection: &SelectionArgs,
) -> anyhow::Result<()> {
    let product = load_snapshot(config, reference)?;
    let state = selection.apply(&product);
    let price = varpick_core::resolve_price_at(&product, state.selection(), config.now());
    println!("{}", price.format());
    Ok(())
}

/// Print catalog issues and fail when there are any.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded or has issues.
pub(crate) fn run_validate(config: &AppConfig, reference: &str) -> anyhow::Result<()> {
    let product = load_unchecked(config, reference)?;
    let issues = varpick_core::validate_product(&product);
    if issues.is_empty() {
        println!("{}: no issues", product.id);
        return Ok(());
    }

    for issue in &issues {
        println!("- {issue}");
    }
    anyhow::bail!("{} catalog issue(s) in '{}'", issues.len(), product.id)
}
