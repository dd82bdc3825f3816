//! Order-specific domain logic: the checkout state machine and completion.

mod actions;
pub mod entity;
pub mod error;
pub mod transitions;

pub use actions::*;
pub use error::*;
pub use transitions::ORDER_MACHINE;
