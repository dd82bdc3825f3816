//! Payment records and their settlement state machine.

mod actions;
pub mod entity;
pub mod error;
pub mod transitions;

pub use actions::*;
pub use error::*;
pub use transitions::PAYMENT_MACHINE;
