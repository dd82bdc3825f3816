use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::domain::{PaymentEvent, PaymentState};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment not found: {0}")]
    NotFound(String),
    #[error("Cannot fire '{event}' on payment in state '{from}'")]
    InvalidTransition { from: PaymentState, event: PaymentEvent },
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),
    #[error("Payment validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<PaymentError>> for PaymentError {
    fn from(err: FrameworkError<PaymentError>) -> Self {
        match err {
            FrameworkError::NotFound(id) => PaymentError::NotFound(id),
            FrameworkError::Entity(e) => e,
            other => PaymentError::ActorCommunicationError(other.to_string()),
        }
    }
}
