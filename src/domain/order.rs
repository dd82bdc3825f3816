use std::fmt;
use chrono::{DateTime, Utc};
use super::Money;

/// Checkout states an order moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderState {
    #[default]
    Cart,
    Address,
    Delivery,
    Payment,
    Confirm,
    /// Waiting on an external payment (e.g. a Paga transfer) to settle.
    Pending,
    Complete,
    Canceled,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Cart => "cart",
            OrderState::Address => "address",
            OrderState::Delivery => "delivery",
            OrderState::Payment => "payment",
            OrderState::Confirm => "confirm",
            OrderState::Pending => "pending",
            OrderState::Complete => "complete",
            OrderState::Canceled => "canceled",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named transitions of the order state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderEvent {
    Next,
    Pending,
    Complete,
    Cancel,
    Resume,
}

impl OrderEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderEvent::Next => "next",
            OrderEvent::Pending => "pending",
            OrderEvent::Complete => "complete",
            OrderEvent::Cancel => "cancel",
            OrderEvent::Resume => "resume",
        }
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    #[allow(dead_code)]
    pub user_id: String,
    pub state: OrderState,
    /// Amount owed for the whole order.
    pub total: Money,
    /// Amount collected so far.
    pub payment_total: Money,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payload for creating a new order.
///
/// `state` seeds the initial state; regular checkouts leave it at `Cart`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: String,
    pub state: OrderState,
    pub total: Money,
    pub payment_total: Money,
}

/// Direct column updates. State only changes through transitions.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub total: Option<Money>,
    pub payment_total: Option<Money>,
}

impl Order {
    /// What is still owed on the order.
    pub fn remaining_total(&self) -> Money {
        self.total - self.payment_total
    }

    /// True once the order has reached the payment step or gone past it.
    pub fn payment_or_complete_or_pending(&self) -> bool {
        matches!(
            self.state,
            OrderState::Complete | OrderState::Pending | OrderState::Payment
        )
    }

    pub fn is_pending(&self) -> bool {
        self.state == OrderState::Pending
    }
}

impl OrderCreate {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            state: OrderState::Cart,
            total: Money::ZERO,
            payment_total: Money::ZERO,
        }
    }

    pub fn with_state(mut self, state: OrderState) -> Self {
        self.state = state;
        self
    }

    pub fn with_total(mut self, total: Money) -> Self {
        self.total = total;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_in(state: OrderState) -> Order {
        Order {
            id: "order_1".to_string(),
            user_id: "user_1".to_string(),
            state,
            total: Money::from(100),
            payment_total: Money::ZERO,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    #[test]
    fn test_remaining_total_without_payments_is_total() {
        let order = order_in(OrderState::Complete);
        assert_eq!(order.remaining_total(), order.total);
        assert_eq!(order.remaining_total(), Money::from(100));
    }

    #[test]
    fn test_remaining_total_subtracts_collected_amount() {
        let mut order = order_in(OrderState::Payment);
        order.total = Money::from(1000);
        order.payment_total = Money::new(20050, 2);
        assert_eq!(order.remaining_total(), Money::new(79950, 2));
    }

    #[test]
    fn test_payment_or_complete_or_pending() {
        assert!(order_in(OrderState::Complete).payment_or_complete_or_pending());
        assert!(order_in(OrderState::Pending).payment_or_complete_or_pending());
        assert!(order_in(OrderState::Payment).payment_or_complete_or_pending());

        for state in [
            OrderState::Cart,
            OrderState::Address,
            OrderState::Delivery,
            OrderState::Confirm,
            OrderState::Canceled,
        ] {
            assert!(!order_in(state).payment_or_complete_or_pending(), "{state}");
        }
    }

    #[test]
    fn test_state_names() {
        assert_eq!(OrderState::default().to_string(), "cart");
        assert_eq!(OrderState::Pending.to_string(), "pending");
        assert_eq!(OrderEvent::Complete.to_string(), "complete");
    }
}
