use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{Money, Order, OrderCreate, OrderEvent, OrderPatch, OrderState};
use super::{OrderAction, OrderError, OrderTransition, ORDER_MACHINE};

fn validate_amount(field: &str, amount: Money) -> Result<(), OrderError> {
    if amount.is_sign_negative() {
        return Err(OrderError::ValidationError(format!(
            "{} must be non-negative, got {}",
            field, amount
        )));
    }
    Ok(())
}

impl Order {
    /// Moves to the state `event` leads to, or fails without touching anything.
    fn fire(&mut self, event: OrderEvent) -> Result<OrderTransition, OrderError> {
        let from = self.state;
        let to = ORDER_MACHINE
            .next(from, event)
            .ok_or(OrderError::InvalidTransition { from, event })?;
        self.state = to;
        Ok(OrderTransition { from, to })
    }

    fn revert(&mut self, transition: OrderTransition) -> Result<OrderTransition, OrderError> {
        if self.state != transition.to {
            return Err(OrderError::StaleTransition { expected: transition.to, found: self.state });
        }
        self.state = transition.from;
        if transition.to == OrderState::Complete {
            self.completed_at = None;
        }
        Ok(OrderTransition { from: transition.to, to: transition.from })
    }
}

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type ActionResult = OrderTransition;
    type Error = OrderError;

    const KIND: &'static str = "order";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// Orders seeded directly as `complete` get `completed_at` stamped now.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        validate_amount("total", params.total)?;
        validate_amount("payment_total", params.payment_total)?;
        let now = Utc::now();
        Ok(Self {
            id,
            user_id: params.user_id,
            state: params.state,
            total: params.total,
            payment_total: params.payment_total,
            created_at: now,
            completed_at: (params.state == OrderState::Complete).then_some(now),
        })
    }

    fn on_update(&mut self, patch: OrderPatch) -> Result<(), OrderError> {
        if let Some(total) = patch.total {
            validate_amount("total", total)?;
            self.total = total;
        }
        if let Some(payment_total) = patch.payment_total {
            validate_amount("payment_total", payment_total)?;
            self.payment_total = payment_total;
        }
        Ok(())
    }

    /// Handles order-specific actions.
    ///
    /// # Errors
    /// `InvalidTransition` if the event cannot fire from the current state,
    /// `StaleTransition` if a revert finds the order already moved on.
    fn handle_action(&mut self, action: OrderAction) -> Result<OrderTransition, OrderError> {
        match action {
            OrderAction::Fire(event) => self.fire(event),
            OrderAction::Finalize { completed_at } => {
                let transition = self.fire(OrderEvent::Complete)?;
                self.completed_at = Some(completed_at);
                Ok(transition)
            }
            OrderAction::Revert { transition } => self.revert(transition),
        }
    }
}
