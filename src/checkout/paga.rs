use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::{OrderClient, PaymentClient, PaymentMethodClient};
use crate::domain::{Order, Payment};
use crate::order_actor::OrderError;
use super::Clock;

/// Paga-specific order behavior: finding the order's Paga payment and
/// settling it together with the order.
#[derive(Clone)]
pub struct PagaCheckout {
    order_client: OrderClient,
    payment_client: PaymentClient,
    payment_method_client: PaymentMethodClient,
    clock: Arc<dyn Clock>,
}

impl PagaCheckout {
    pub fn new(
        order_client: OrderClient,
        payment_client: PaymentClient,
        payment_method_client: PaymentMethodClient,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            order_client,
            payment_client,
            payment_method_client,
            clock,
        }
    }

    /// The order's open (checkout or pending) payment made through a Paga
    /// method. When several match, the most recently created one wins.
    #[instrument(skip(self))]
    pub async fn paga_payment(&self, order_id: String) -> Result<Option<Payment>, OrderError> {
        let paga_methods: HashSet<String> = self
            .payment_method_client
            .paga_methods()
            .await?
            .into_iter()
            .map(|method| method.id)
            .collect();
        if paga_methods.is_empty() {
            debug!("No Paga payment method configured");
            return Ok(None);
        }

        let payment = self
            .payment_client
            .payments_for_order(order_id)
            .await?
            .into_iter()
            .filter(|payment| payment.is_open() && paga_methods.contains(&payment.payment_method_id))
            .last();

        match &payment {
            Some(payment) => debug!(payment_id = %payment.id, state = %payment.state, "Paga payment found"),
            None => debug!("No open Paga payment"),
        }
        Ok(payment)
    }

    /// Completes the order and settles its Paga payment.
    ///
    /// The order's completion transition runs first and exactly once. If it is
    /// rejected (order not yet at the payment step, or already complete) the
    /// payment is left untouched. If the payment can no longer be completed
    /// (voided or failed in the meantime) the order completion is reverted
    /// before the error is returned.
    #[instrument(skip(self))]
    pub async fn finalize_order(&self, order_id: String) -> Result<Order, OrderError> {
        let order = self
            .order_client
            .get_order(order_id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(order_id.clone()))?;

        let payment = self.paga_payment(order.id.clone()).await?;

        let completed_at = self.clock.now();
        let transition = match self.order_client.finalize(order.id.clone(), completed_at).await {
            Ok(transition) => transition,
            Err(e) => {
                error!(error = %e, state = %order.state, "Order completion rejected");
                return Err(e);
            }
        };
        info!(from = %transition.from, to = %transition.to, %completed_at, "Order completed");

        match payment {
            Some(payment) => {
                if let Err(e) = self.payment_client.complete_payment(payment.id.clone()).await {
                    error!(payment_id = %payment.id, error = %e, "Paga payment completion failed");
                    if let Err(revert) = self.order_client.revert(order.id.clone(), transition).await {
                        error!(error = %revert, "Could not revert order completion");
                    }
                    return Err(e.into());
                }
                info!(payment_id = %payment.id, amount = %payment.amount, "Paga payment completed");
            }
            None => warn!("Order completed without an open Paga payment"),
        }

        self.order_client
            .get_order(order.id.clone())
            .await?
            .ok_or(OrderError::NotFound(order.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::app_system::{OrderSystem, SystemConfig};
    use crate::checkout::FixedClock;
    use crate::domain::{
        Money, OrderCreate, OrderEvent, OrderState, PaymentCreate, PaymentMethodCreate,
        PaymentMethodKind, PaymentState, User,
    };

    struct Fixture {
        system: OrderSystem,
        user_id: String,
        paga_method_id: String,
    }

    impl Fixture {
        async fn new() -> Self {
            Self::with_system(OrderSystem::new()).await
        }

        async fn with_system(system: OrderSystem) -> Self {
            let user_id = system
                .user_client
                .create_user(User::new("Test", "test@testmail.com"))
                .await
                .unwrap();
            let paga_method_id = system
                .payment_method_client
                .create_payment_method(PaymentMethodCreate::paga("paga epay", "test"))
                .await
                .unwrap();
            Self { system, user_id, paga_method_id }
        }

        async fn order_with_state(&self, state: OrderState) -> String {
            let params = OrderCreate::new(self.user_id.clone())
                .with_state(state)
                .with_total(Money::from(100));
            self.system.order_client.create_order(params).await.unwrap()
        }

        async fn payment(&self, order_id: &str, method_id: &str, state: PaymentState) -> String {
            let params = PaymentCreate::new(order_id, method_id, Money::from(100)).with_state(state);
            self.system.payment_client.create_payment(params).await.unwrap()
        }

        async fn paga_payment(&self, order_id: &str, state: PaymentState) -> String {
            self.payment(order_id, &self.paga_method_id, state).await
        }

        async fn payment_state(&self, payment_id: &str) -> PaymentState {
            self.system
                .payment_client
                .get_payment(payment_id.to_string())
                .await
                .unwrap()
                .unwrap()
                .state
        }

        async fn order(&self, order_id: &str) -> Order {
            self.system.order_client.get_order(order_id.to_string()).await.unwrap().unwrap()
        }
    }

    #[tokio::test]
    async fn test_paga_payment_absent() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Payment).await;

        let found = fx.system.paga_checkout.paga_payment(order_id).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_paga_payment_in_checkout() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Payment).await;
        let payment_id = fx.paga_payment(&order_id, PaymentState::Checkout).await;

        let found = fx.system.paga_checkout.paga_payment(order_id).await.unwrap().unwrap();
        assert_eq!(found.id, payment_id);
        assert_eq!(found.state, PaymentState::Checkout);
    }

    #[tokio::test]
    async fn test_paga_payment_in_pending() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Pending).await;
        let payment_id = fx.paga_payment(&order_id, PaymentState::Pending).await;

        let found = fx.system.paga_checkout.paga_payment(order_id).await.unwrap().unwrap();
        assert_eq!(found.id, payment_id);
    }

    #[tokio::test]
    async fn test_paga_payment_ignores_other_methods_and_settled_payments() {
        let fx = Fixture::new().await;
        let check_id = fx
            .system
            .payment_method_client
            .create_payment_method(PaymentMethodCreate::new("check", PaymentMethodKind::Check, "test"))
            .await
            .unwrap();
        let order_id = fx.order_with_state(OrderState::Payment).await;
        let other_order_id = fx.order_with_state(OrderState::Payment).await;

        fx.payment(&order_id, &check_id, PaymentState::Checkout).await;
        fx.paga_payment(&order_id, PaymentState::Completed).await;
        fx.paga_payment(&order_id, PaymentState::Failed).await;
        fx.paga_payment(&other_order_id, PaymentState::Checkout).await;

        let found = fx.system.paga_checkout.paga_payment(order_id).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_paga_payment_prefers_latest() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Payment).await;
        fx.paga_payment(&order_id, PaymentState::Checkout).await;
        let latest = fx.paga_payment(&order_id, PaymentState::Pending).await;

        let found = fx.system.paga_checkout.paga_payment(order_id).await.unwrap().unwrap();
        assert_eq!(found.id, latest);
    }

    #[tokio::test]
    async fn test_paga_payment_survives_method_deactivation() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Payment).await;
        let payment_id = fx.paga_payment(&order_id, PaymentState::Checkout).await;
        fx.system
            .payment_method_client
            .update_payment_method(
                fx.paga_method_id.clone(),
                crate::domain::PaymentMethodPatch { name: None, active: Some(false) },
            )
            .await
            .unwrap();

        let found = fx.system.paga_checkout.paga_payment(order_id).await.unwrap().unwrap();
        assert_eq!(found.id, payment_id);
    }

    #[tokio::test]
    async fn test_finalize_order() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Pending).await;
        let payment_id = fx.paga_payment(&order_id, PaymentState::Checkout).await;

        let order = fx.system.paga_checkout.finalize_order(order_id.clone()).await.unwrap();

        assert_eq!(order.state, OrderState::Complete);
        let completed_at = order.completed_at.expect("completed_at set");
        let drift = (Utc::now() - completed_at).num_milliseconds().abs();
        assert!(drift <= 2_000, "completed_at drifted {drift}ms");
        assert_eq!(fx.payment_state(&payment_id).await, PaymentState::Completed);
        assert_eq!(fx.order(&order_id).await, order);
    }

    #[tokio::test]
    async fn test_finalize_uses_clock_at_invocation() {
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let system = OrderSystem::start(&SystemConfig::default(), Arc::new(FixedClock(at)));
        let fx = Fixture::with_system(system).await;
        let order_id = fx.order_with_state(OrderState::Payment).await;

        let order = fx.system.paga_checkout.finalize_order(order_id).await.unwrap();
        assert_eq!(order.completed_at, Some(at));
    }

    #[tokio::test]
    async fn test_finalize_without_paga_payment() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Confirm).await;

        let order = fx.system.paga_checkout.finalize_order(order_id).await.unwrap();
        assert_eq!(order.state, OrderState::Complete);
        assert!(order.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_finalize_rejected_leaves_everything_untouched() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Cart).await;
        let payment_id = fx.paga_payment(&order_id, PaymentState::Checkout).await;

        let err = fx.system.paga_checkout.finalize_order(order_id.clone()).await.unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidTransition { from: OrderState::Cart, event: OrderEvent::Complete }
        );

        let order = fx.order(&order_id).await;
        assert_eq!(order.state, OrderState::Cart);
        assert_eq!(order.completed_at, None);
        assert_eq!(fx.payment_state(&payment_id).await, PaymentState::Checkout);
    }

    #[tokio::test]
    async fn test_finalize_twice() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Pending).await;
        let payment_id = fx.paga_payment(&order_id, PaymentState::Checkout).await;

        let first = fx.system.paga_checkout.finalize_order(order_id.clone()).await.unwrap();
        let err = fx.system.paga_checkout.finalize_order(order_id.clone()).await.unwrap_err();

        assert!(matches!(err, OrderError::InvalidTransition { from: OrderState::Complete, .. }));
        assert_eq!(fx.order(&order_id).await.completed_at, first.completed_at);
        assert_eq!(fx.payment_state(&payment_id).await, PaymentState::Completed);
    }

    #[tokio::test]
    async fn test_concurrent_finalize_completes_once() {
        let fx = Fixture::new().await;
        let order_id = fx.order_with_state(OrderState::Pending).await;
        fx.paga_payment(&order_id, PaymentState::Checkout).await;

        let a = fx.system.paga_checkout.clone();
        let b = fx.system.paga_checkout.clone();
        let (ra, rb) = tokio::join!(
            a.finalize_order(order_id.clone()),
            b.finalize_order(order_id.clone())
        );

        assert_eq!([ra.is_ok(), rb.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(fx.order(&order_id).await.state, OrderState::Complete);
    }

    #[tokio::test]
    async fn test_finalize_unknown_order() {
        let fx = Fixture::new().await;
        let err = fx.system.paga_checkout.finalize_order("order_404".to_string()).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("order_404".to_string()));
    }
}
