//! AppBay Core - Shared types library.
//!
//! This crate provides common types used across all AppBay components:
//! - `storefront` - Catalog, cart, and installation engine
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! terminal handling. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and catalog
//!   records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
