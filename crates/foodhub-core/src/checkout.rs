//! Checkout
//!
//! Order totals (service fee, tax) and the checkout request form model.
//! Totals are always recomputed from the current cart lines; there is no
//! cached "is empty" flag to go stale when the cart empties mid-session.

use crate::domain::CartEngine;

/// Flat service fee applied to any non-empty order
pub const SERVICE_FEE: f64 = 4.5;
/// Tax rate applied at checkout
pub const TAX_RATE: f64 = 0.08;

/// Derived money breakdown for the order review and checkout summaries
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub service_fee: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderTotals {
    /// Order-review totals: subtotal plus service fee, tax not yet applied.
    pub fn review(cart: &CartEngine) -> Self {
        Self::compute(cart, false)
    }

    /// Checkout totals: subtotal plus service fee plus tax.
    pub fn checkout(cart: &CartEngine) -> Self {
        Self::compute(cart, true)
    }

    fn compute(cart: &CartEngine, with_tax: bool) -> Self {
        let subtotal = cart.subtotal();
        let service_fee = if cart.is_empty() { 0.0 } else { SERVICE_FEE };
        let tax = if cart.is_empty() || !with_tax {
            0.0
        } else {
            subtotal * TAX_RATE
        };

        Self {
            subtotal,
            service_fee,
            tax,
            total: subtotal + service_fee + tax,
        }
    }
}

/// How the guest wants to receive the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiningOption {
    #[default]
    DineIn,
    Takeaway,
}

impl DiningOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiningOption::DineIn => "dine-in",
            DiningOption::Takeaway => "takeaway",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "takeaway" => DiningOption::Takeaway,
            _ => DiningOption::DineIn,
        }
    }
}

/// Checkout form state
///
/// The form is demo-only: submission validates and resets, no payment is
/// taken. Field-level presentation (inline errors) belongs to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub dining_option: DiningOption,
    pub arrival_time: String,
    pub notes: String,
}

impl Default for CheckoutDetails {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            dining_option: DiningOption::DineIn,
            arrival_time: "19:00".to_string(),
            notes: String::new(),
        }
    }
}

impl CheckoutDetails {
    /// Labels of required fields that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.email.trim().is_empty() {
            missing.push("email address");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone number");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}
