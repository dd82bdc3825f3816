use crate::domain::{OrderEvent, OrderState};
use crate::domain::{OrderEvent as E, OrderState as S};
use crate::state_machine::{StateMachine, Transition};

/// Checkout flow. `pending` parks an order while an external payment settles;
/// `complete` is reachable from any state at or past the payment step.
pub static ORDER_MACHINE: StateMachine<OrderState, OrderEvent> = StateMachine::new(&[
    Transition { event: E::Next, from: &[S::Cart], to: S::Address },
    Transition { event: E::Next, from: &[S::Address], to: S::Delivery },
    Transition { event: E::Next, from: &[S::Delivery], to: S::Payment },
    Transition { event: E::Next, from: &[S::Payment], to: S::Confirm },
    Transition { event: E::Pending, from: &[S::Payment, S::Confirm], to: S::Pending },
    Transition { event: E::Complete, from: &[S::Payment, S::Confirm, S::Pending], to: S::Complete },
    Transition { event: E::Cancel, from: &[S::Complete, S::Pending], to: S::Canceled },
    Transition { event: E::Resume, from: &[S::Canceled], to: S::Complete },
]);
