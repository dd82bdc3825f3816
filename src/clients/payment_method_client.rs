use tracing::{debug, instrument};
use crate::domain::{PaymentMethod, PaymentMethodCreate, PaymentMethodPatch};
use crate::payment_method_actor::PaymentMethodError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the PaymentMethod actor.
#[derive(Clone)]
pub struct PaymentMethodClient {
    inner: ResourceClient<PaymentMethod>,
}

impl_basic_client!(PaymentMethodClient, PaymentMethod, PaymentMethodError, payment_method);

impl PaymentMethodClient {
    #[instrument(skip(self))]
    pub async fn create_payment_method(&self, params: PaymentMethodCreate) -> Result<String, PaymentMethodError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(PaymentMethodError::from)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_payment_method(&self, id: String, patch: PaymentMethodPatch) -> Result<PaymentMethod, PaymentMethodError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(PaymentMethodError::from)
    }

    /// Every Paga method, active or not. Payments keep pointing at a method
    /// after it is deactivated.
    #[instrument(skip(self))]
    pub async fn paga_methods(&self) -> Result<Vec<PaymentMethod>, PaymentMethodError> {
        debug!("Sending request");
        self.inner.list(PaymentMethod::is_paga).await.map_err(PaymentMethodError::from)
    }
}
