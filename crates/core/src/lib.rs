//! Orbit Cafe Core - Shared types library.
//!
//! This crate provides the domain value types used by the ordering core:
//! - `storefront` - Catalog, cart store, views, and checkout flow
//! - `integration-tests` - Cross-crate scenario and property tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, names, payment
//!   methods, and themes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
