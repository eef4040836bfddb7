//! Checkout flow.
//!
//! Validation turns the raw form into a [`ValidOrder`]; only a `ValidOrder`
//! can be submitted. Submitting totals the cart, clears it, and returns the
//! confirmation for the modal.
//!
//! ```text
//! Editing --(validation fails)--> Editing { errors }
//! Editing --(validation passes)--> Submitted(confirmation)
//! Submitted --(reset)--> Editing
//! ```

use chrono::{DateTime, Utc};
use orbit_cafe_core::{FullName, FullNameError, PaymentMethod, PaymentMethodError, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::services::cart_store::CartStore;

/// Checkout form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub payment: String,
}

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    FullName,
    Payment,
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: CheckoutField,
    pub message: String,
}

/// Every reason a checkout form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("checkout form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether `field` has at least one error.
    #[must_use]
    pub fn has(&self, field: CheckoutField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// A checkout form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pub name: FullName,
    pub contact: Option<String>,
    pub payment: PaymentMethod,
}

/// Confirmation shown once an order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub name: FullName,
    pub contact: Option<String>,
    pub payment: PaymentMethod,
    pub total: Price,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// The text shown in the confirmation modal.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Thank you {}. Order total: {}.",
            self.name,
            self.total.display()
        )
    }
}

/// Validate a submitted form.
///
/// # Errors
///
/// Returns every field-level failure: a missing or overlong name, and a
/// missing or unknown payment method. Contact is optional free text.
pub fn validate(form: &CheckoutForm) -> Result<ValidOrder, ValidationErrors> {
    let mut errors = Vec::new();

    let name = FullName::parse(&form.full_name)
        .map_err(|e| {
            let message = match e {
                FullNameError::Empty => "Please enter your full name".to_string(),
                FullNameError::TooLong { max } => {
                    format!("Full name must be at most {max} characters")
                }
            };
            errors.push(FieldError {
                field: CheckoutField::FullName,
                message,
            });
        })
        .ok();

    let payment = form
        .payment
        .parse::<PaymentMethod>()
        .map_err(|e| {
            let message = match e {
                PaymentMethodError::NotSelected => "Please choose payment method".to_string(),
                PaymentMethodError::Unsupported(value) => {
                    format!("Unsupported payment method: {value}")
                }
            };
            errors.push(FieldError {
                field: CheckoutField::Payment,
                message,
            });
        })
        .ok();

    match (name, payment) {
        (Some(name), Some(payment)) => {
            let contact = Some(form.contact.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_owned);
            Ok(ValidOrder {
                name,
                contact,
                payment,
            })
        }
        _ => Err(ValidationErrors { errors }),
    }
}

/// Place the order: total the cart, clear it, and confirm.
///
/// Submitting again without adding anything confirms a zero total.
#[instrument(skip(store, order), fields(payment = %order.payment))]
pub fn submit(store: &mut CartStore, order: ValidOrder) -> OrderConfirmation {
    let total = store.total_price();
    store.clear();
    tracing::info!(total = %total, "Order placed");

    OrderConfirmation {
        name: order.name,
        contact: order.contact,
        payment: order.payment,
        total,
        placed_at: Utc::now(),
    }
}

/// Where the checkout form currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    Editing { errors: Vec<FieldError> },
    Submitted(OrderConfirmation),
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::Editing { errors: Vec::new() }
    }
}

/// Checkout state machine.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Errors from the last rejected submission, if editing.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match &self.state {
            CheckoutState::Editing { errors } => errors,
            CheckoutState::Submitted(_) => &[],
        }
    }

    /// Validate and, if valid, submit the form.
    ///
    /// # Errors
    ///
    /// Returns the validation failures; the cart is left untouched and the
    /// flow stays in `Editing` with those errors.
    pub fn submit(
        &mut self,
        store: &mut CartStore,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, ValidationErrors> {
        match validate(form) {
            Ok(order) => {
                let confirmation = submit(store, order);
                self.state = CheckoutState::Submitted(confirmation.clone());
                Ok(confirmation)
            }
            Err(errors) => {
                tracing::debug!(count = errors.errors().len(), "Checkout form rejected");
                self.state = CheckoutState::Editing {
                    errors: errors.errors().to_vec(),
                };
                Err(errors)
            }
        }
    }

    /// Start a new order.
    pub fn reset(&mut self) {
        self.state = CheckoutState::default();
    }
}
