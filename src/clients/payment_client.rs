use tracing::{debug, error, info, instrument};
use crate::domain::{Payment, PaymentCreate, PaymentEvent};
use crate::payment_actor::{PaymentAction, PaymentError, PaymentTransition};
use crate::actor_framework::ResourceClient;
use crate::clients::{OrderClient, PaymentMethodClient};

/// Client for interacting with the Payment actor.
///
/// Validates the order and the payment method before a payment is created.
#[derive(Clone)]
pub struct PaymentClient {
    inner: ResourceClient<Payment>,
    order_client: OrderClient,
    payment_method_client: PaymentMethodClient,
}

impl PaymentClient {
    pub fn new(
        inner: ResourceClient<Payment>,
        order_client: OrderClient,
        payment_method_client: PaymentMethodClient,
    ) -> Self {
        Self { inner, order_client, payment_method_client }
    }

    #[instrument(skip(self), fields(order_id = %params.order_id, payment_method_id = %params.payment_method_id))]
    pub async fn create_payment(&self, params: PaymentCreate) -> Result<String, PaymentError> {
        info!("Processing create_payment request");

        match self.order_client.get_order(params.order_id.clone()).await {
            Ok(Some(order)) => debug!(state = %order.state, "Order validation successful"),
            Ok(None) => {
                error!("Order not found");
                return Err(PaymentError::InvalidOrder(params.order_id));
            }
            Err(e) => {
                error!(error = %e, "Order validation failed");
                return Err(PaymentError::InvalidOrder(e.to_string()));
            }
        }

        match self.payment_method_client.get_payment_method(params.payment_method_id.clone()).await {
            Ok(Some(method)) => debug!(method_name = %method.name, "Payment method validation successful"),
            Ok(None) => {
                error!("Payment method not found");
                return Err(PaymentError::InvalidPaymentMethod(params.payment_method_id));
            }
            Err(e) => {
                error!(error = %e, "Payment method validation failed");
                return Err(PaymentError::InvalidPaymentMethod(e.to_string()));
            }
        }

        let id = self.inner.create(params).await.map_err(PaymentError::from)?;
        info!(payment_id = %id, "Payment created");
        Ok(id)
    }

    /// Payments attached to `order_id`, oldest first.
    #[instrument(skip(self))]
    pub async fn payments_for_order(&self, order_id: String) -> Result<Vec<Payment>, PaymentError> {
        debug!("Sending request");
        self.inner
            .list(move |payment: &Payment| payment.order_id == order_id)
            .await
            .map_err(PaymentError::from)
    }

    #[instrument(skip(self))]
    pub async fn transition(&self, id: String, event: PaymentEvent) -> Result<PaymentTransition, PaymentError> {
        debug!("Sending request");
        let transition = self
            .inner
            .perform_action(id, PaymentAction::Fire(event))
            .await
            .map_err(PaymentError::from)?;
        info!(from = %transition.from, to = %transition.to, "Payment transitioned");
        Ok(transition)
    }

    pub async fn complete_payment(&self, id: String) -> Result<PaymentTransition, PaymentError> {
        self.transition(id, PaymentEvent::Complete).await
    }
}

impl_client_methods!(PaymentClient, Payment, PaymentError, payment);
