//! Variant selection and pricing engine for a single product page.
//!
//! Every derivation is a pure function of an immutable [`Product`] snapshot
//! and a [`Selection`]. The only mutable state is [`SelectionState`], owned
//! by one presentation session.

pub mod app_config;
pub mod availability;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod image;
pub mod matcher;
pub mod pricing;
pub mod selection;
pub mod snapshot;
pub mod validate;
pub mod view;

#[cfg(test)]
mod fixtures;

pub use app_config::{AppConfig, Environment};
pub use availability::is_attribute_value_available;
pub use catalog::{
    Attribute, ImageRef, Product, ProductOption, SelectType, StockStatus, Variant,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use domain::{build_domain, AttributeDomain};
pub use error::{ConfigError, SnapshotError};
pub use image::resolve_hover_image;
pub use matcher::{filter_variants, match_variant};
pub use pricing::{resolve_price, resolve_price_at, PriceView};
pub use selection::{reset_selection, toggle_selection, Hover, Selection, SelectionState};
pub use snapshot::{load_product, resolve_snapshot_path};
pub use validate::{validate_product, CatalogIssue};
pub use view::{derive_view, DimensionView, ProductView, ValueView};
