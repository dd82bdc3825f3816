use crate::actor_framework::Entity;
use crate::domain::{PaymentMethod, PaymentMethodCreate, PaymentMethodPatch};
use super::PaymentMethodError;

impl Entity for PaymentMethod {
    type Id = String;
    type CreateParams = PaymentMethodCreate;
    type Patch = PaymentMethodPatch;
    type Action = ();
    type ActionResult = ();
    type Error = PaymentMethodError;

    const KIND: &'static str = "payment_method";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: PaymentMethodCreate) -> Result<Self, PaymentMethodError> {
        if params.name.trim().is_empty() {
            return Err(PaymentMethodError::ValidationError("name must not be blank".to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            kind: params.kind,
            environment: params.environment,
            active: true,
        })
    }

    fn on_update(&mut self, patch: PaymentMethodPatch) -> Result<(), PaymentMethodError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), PaymentMethodError> {
        Ok(())
    }
}
