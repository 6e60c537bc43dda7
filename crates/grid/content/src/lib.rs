//! Data-driven item and grid content.
//!
//! Item catalogs are RON files and grid configuration is TOML. Loaders turn
//! them into `grid-core` types; the engine itself never touches the
//! filesystem.
//!
//! A small built-in catalog ships with the crate for demos and tests.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ItemCatalogFile, ItemLoader, LoadResult};
