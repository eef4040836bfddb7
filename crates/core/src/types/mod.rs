//! Core types for Orbit Cafe.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod name;
pub mod payment;
pub mod price;
pub mod theme;

pub use id::*;
pub use name::{FullName, FullNameError};
pub use payment::{PaymentMethod, PaymentMethodError};
pub use price::Price;
pub use theme::{Theme, ThemeError};
