//! Paga checkout behavior layered on top of the order and payment actors.

pub mod clock;
pub mod paga;

pub use clock::*;
pub use paga::*;
