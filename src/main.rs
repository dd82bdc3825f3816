mod domain;
mod state_machine;
mod clients;
mod checkout;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;
mod order_actor;
mod payment_actor;
mod payment_method_actor;

use tracing::{error, info, Instrument};
use crate::domain::{Money, OrderCreate, OrderPatch, OrderState, PaymentCreate, PaymentMethodCreate, User};
use crate::app_system::{OrderSystem, SystemConfig, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!("Starting application with Paga order system");

    let system = OrderSystem::start(&config, std::sync::Arc::new(checkout::SystemClock));

    let user = User::new("Alice", "alice@example.com");
    let user_id = system.user_client.create_user(user).await.map_err(|e| e.to_string())?;
    info!(user_id = %user_id, "User created successfully");

    let paga_method_id = system
        .payment_method_client
        .create_payment_method(PaymentMethodCreate::paga("paga epay", "development"))
        .await
        .map_err(|e| e.to_string())?;

    // Customer reaches the payment step and pays through Paga
    let span = tracing::info_span!("checkout");
    let order_id = async {
        let params = OrderCreate::new(user_id.clone())
            .with_state(OrderState::Payment)
            .with_total(Money::from(100));
        let order_id = system.order_client.create_order(params).await?;
        system
            .payment_client
            .create_payment(PaymentCreate::new(order_id.clone(), paga_method_id, Money::from(100)))
            .await?;
        system.order_client.pending(order_id.clone()).await?;
        Ok::<_, order_actor::OrderError>(order_id)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    // Paga notifies us that the transfer settled
    let span = tracing::info_span!("paga_notification", order_id = %order_id);
    let result = async { system.paga_checkout.finalize_order(order_id.clone()).await }
        .instrument(span)
        .await;

    match result {
        Ok(order) => {
            info!(
                order_id = %order.id,
                state = %order.state,
                eligible = order.payment_or_complete_or_pending(),
                remaining_total = %order.remaining_total(),
                "Order finalized"
            );
            // Record what Paga collected
            let patch = OrderPatch { total: None, payment_total: Some(order.total) };
            let order = system.order_client.update_order(order.id, patch).await.map_err(|e| e.to_string())?;
            info!(remaining_total = %order.remaining_total(), "Payment total recorded");
        }
        Err(e) => error!(error = %e, "Order finalization failed"),
    }

    let not_pending = system.order_client.not_pending().await.map_err(|e| e.to_string())?;
    let complete = system
        .order_client
        .with_state(OrderState::Complete)
        .await
        .map_err(|e| e.to_string())?;
    info!(not_pending = not_pending.len(), complete = complete.len(), "Order summary");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
