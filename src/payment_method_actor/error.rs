use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentMethodError {
    #[error("Payment method not found: {0}")]
    NotFound(String),
    #[error("Payment method validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<PaymentMethodError>> for PaymentMethodError {
    fn from(err: FrameworkError<PaymentMethodError>) -> Self {
        match err {
            FrameworkError::NotFound(id) => PaymentMethodError::NotFound(id),
            FrameworkError::Entity(e) => e,
            other => PaymentMethodError::ActorCommunicationError(other.to_string()),
        }
    }
}
