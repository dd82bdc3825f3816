use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::domain::{OrderEvent, OrderState};
use crate::payment_actor::PaymentError;
use crate::payment_method_actor::PaymentMethodError;
use crate::user_actor::UserError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid user: {0}")]
    InvalidUser(String),
    #[error("Cannot fire '{event}' on order in state '{from}'")]
    InvalidTransition { from: OrderState, event: OrderEvent },
    #[error("Order moved on to '{found}', expected '{expected}'")]
    StaleTransition { expected: OrderState, found: OrderState },
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),
    #[error("Payment method error: {0}")]
    PaymentMethod(#[from] PaymentMethodError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<OrderError>> for OrderError {
    fn from(err: FrameworkError<OrderError>) -> Self {
        match err {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Entity(e) => e,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<UserError> for OrderError {
    fn from(err: UserError) -> Self {
        OrderError::InvalidUser(err.to_string())
    }
}
