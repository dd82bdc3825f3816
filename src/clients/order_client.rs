use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument};
use crate::domain::{Order, OrderCreate, OrderEvent, OrderPatch, OrderState};
use crate::order_actor::{OrderAction, OrderError, OrderTransition};
use crate::actor_framework::ResourceClient;
use crate::clients::UserClient;

/// Client for interacting with the Order actor.
///
/// Validates the owning user before an order is created.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, user_client: UserClient) -> Self {
        Self { inner, user_client }
    }

    #[instrument(skip(self), fields(user_id = %params.user_id, state = %params.state))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<String, OrderError> {
        info!("Processing create_order request");

        match self.user_client.get_user(params.user_id.clone()).await {
            Ok(Some(user)) => debug!(user_name = %user.name, "User validation successful"),
            Ok(None) => {
                error!("User not found");
                return Err(OrderError::InvalidUser(params.user_id));
            }
            Err(e) => {
                error!(error = %e, "User validation failed");
                return Err(OrderError::from(e));
            }
        }

        let id = self.inner.create(params).await.map_err(OrderError::from)?;
        info!(order_id = %id, "Order created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: String, patch: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(OrderError::from)
    }

    /// Fires a named transition on the order.
    #[instrument(skip(self))]
    pub async fn transition(&self, id: String, event: OrderEvent) -> Result<OrderTransition, OrderError> {
        debug!("Sending request");
        let transition = self
            .inner
            .perform_action(id, OrderAction::Fire(event))
            .await
            .map_err(OrderError::from)?;
        info!(from = %transition.from, to = %transition.to, "Order transitioned");
        Ok(transition)
    }

    /// Parks the order while an external payment settles.
    pub async fn pending(&self, id: String) -> Result<OrderTransition, OrderError> {
        self.transition(id, OrderEvent::Pending).await
    }

    /// The completion transition. Moves the order to `complete` and stamps
    /// `completed_at` in a single request.
    #[instrument(skip(self))]
    pub async fn finalize(&self, id: String, completed_at: DateTime<Utc>) -> Result<OrderTransition, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Finalize { completed_at })
            .await
            .map_err(OrderError::from)
    }

    /// Compensates a committed transition by moving the order back to
    /// `transition.from`.
    #[instrument(skip(self))]
    pub async fn revert(&self, id: String, transition: OrderTransition) -> Result<OrderTransition, OrderError> {
        debug!("Sending request");
        let undone = self
            .inner
            .perform_action(id, OrderAction::Revert { transition })
            .await
            .map_err(OrderError::from)?;
        info!(from = %undone.from, to = %undone.to, "Order transition reverted");
        Ok(undone)
    }

    /// Every order not waiting on a payment, in creation order.
    #[instrument(skip(self))]
    pub async fn not_pending(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list(|order: &Order| !order.is_pending()).await.map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn with_state(&self, state: OrderState) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner.list(move |order: &Order| order.state == state).await.map_err(OrderError::from)
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);
