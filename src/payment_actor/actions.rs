use crate::domain::{PaymentEvent, PaymentState};

#[derive(Debug, Clone)]
pub enum PaymentAction {
    Fire(PaymentEvent),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentTransition {
    pub from: PaymentState,
    pub to: PaymentState,
}
