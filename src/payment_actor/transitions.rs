use crate::domain::{PaymentEvent, PaymentState};
use crate::domain::{PaymentEvent as E, PaymentState as S};
use crate::state_machine::{StateMachine, Transition};

pub static PAYMENT_MACHINE: StateMachine<PaymentState, PaymentEvent> = StateMachine::new(&[
    Transition { event: E::Pend, from: &[S::Checkout, S::Processing], to: S::Pending },
    Transition { event: E::StartProcessing, from: &[S::Checkout, S::Pending], to: S::Processing },
    Transition { event: E::Complete, from: &[S::Checkout, S::Pending, S::Processing], to: S::Completed },
    Transition { event: E::Failure, from: &[S::Pending, S::Processing], to: S::Failed },
    Transition { event: E::Void, from: &[S::Checkout, S::Pending, S::Processing, S::Completed], to: S::Void },
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_payments_complete() {
        assert_eq!(PAYMENT_MACHINE.next(S::Checkout, E::Complete), Some(S::Completed));
        assert_eq!(PAYMENT_MACHINE.next(S::Pending, E::Complete), Some(S::Completed));
    }

    #[test]
    fn test_terminal_states() {
        for from in [S::Failed, S::Void] {
            assert!(PAYMENT_MACHINE.events_from(from).is_empty(), "{from}");
        }
        assert_eq!(PAYMENT_MACHINE.events_from(S::Completed), vec![E::Void]);
    }
}
