use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{Payment, PaymentCreate};
use super::{PaymentAction, PaymentError, PaymentTransition, PAYMENT_MACHINE};

impl Entity for Payment {
    type Id = String;
    type CreateParams = PaymentCreate;
    type Patch = ();
    type Action = PaymentAction;
    type ActionResult = PaymentTransition;
    type Error = PaymentError;

    const KIND: &'static str = "payment";

    fn id(&self) -> &String { &self.id }

    /// # Errors
    /// Rejects zero or negative amounts.
    fn from_create_params(id: String, params: PaymentCreate) -> Result<Self, PaymentError> {
        if params.amount.is_zero() || params.amount.is_sign_negative() {
            return Err(PaymentError::ValidationError(format!(
                "amount must be positive, got {}",
                params.amount
            )));
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            payment_method_id: params.payment_method_id,
            amount: params.amount,
            state: params.state,
            created_at: Utc::now(),
        })
    }

    // Payments change only through transitions
    fn on_update(&mut self, _patch: ()) -> Result<(), PaymentError> {
        Ok(())
    }

    fn handle_action(&mut self, action: PaymentAction) -> Result<PaymentTransition, PaymentError> {
        match action {
            PaymentAction::Fire(event) => {
                let from = self.state;
                let to = PAYMENT_MACHINE
                    .next(from, event)
                    .ok_or(PaymentError::InvalidTransition { from, event })?;
                self.state = to;
                Ok(PaymentTransition { from, to })
            }
        }
    }
}
