use std::fmt;
use chrono::{DateTime, Utc};
use super::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentState {
    #[default]
    Checkout,
    Pending,
    Processing,
    Completed,
    Failed,
    Void,
}

impl PaymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::Checkout => "checkout",
            PaymentState::Pending => "pending",
            PaymentState::Processing => "processing",
            PaymentState::Completed => "completed",
            PaymentState::Failed => "failed",
            PaymentState::Void => "void",
        }
    }
}

impl fmt::Display for PaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentEvent {
    Pend,
    StartProcessing,
    Complete,
    Failure,
    Void,
}

impl PaymentEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentEvent::Pend => "pend",
            PaymentEvent::StartProcessing => "start_processing",
            PaymentEvent::Complete => "complete",
            PaymentEvent::Failure => "failure",
            PaymentEvent::Void => "void",
        }
    }
}

impl fmt::Display for PaymentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monetary transaction attached to an order through a payment method.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub payment_method_id: String,
    pub amount: Money,
    pub state: PaymentState,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub order_id: String,
    pub payment_method_id: String,
    pub amount: Money,
    pub state: PaymentState,
}

impl Payment {
    /// Checkout and pending payments can still be settled.
    pub fn is_open(&self) -> bool {
        matches!(self.state, PaymentState::Checkout | PaymentState::Pending)
    }
}

impl PaymentCreate {
    pub fn new(
        order_id: impl Into<String>,
        payment_method_id: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            payment_method_id: payment_method_id.into(),
            amount,
            state: PaymentState::Checkout,
        }
    }

    pub fn with_state(mut self, state: PaymentState) -> Self {
        self.state = state;
        self
    }
}
