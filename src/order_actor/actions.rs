use chrono::{DateTime, Utc};
use crate::domain::{OrderEvent, OrderState};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Fires a named transition such as `pending` or `next`.
    Fire(OrderEvent),
    /// The completion transition: moves the order to `complete` and stamps
    /// `completed_at`, both or neither.
    Finalize { completed_at: DateTime<Utc> },
    /// Undoes a transition that already committed: the order must still be in
    /// `transition.to` and goes back to `transition.from`. Undoing a completion
    /// clears `completed_at`.
    Revert { transition: OrderTransition },
}

/// Outcome of a successful OrderAction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTransition {
    pub from: OrderState,
    pub to: OrderState,
}
