//! Orbit Cafe Storefront library.
//!
//! The ordering core of the Orbit Cafe menu: a fixed catalog, a cart store
//! persisted to a key-value slot, view-state shaping for the menu and cart,
//! and a checkout flow. Rendering, toasts, and the confirmation modal are
//! external collaborators fed through [`state::AppState`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod views;
