//! Customer records. Orders must belong to a known user.

pub mod entity;
pub mod error;

pub use error::*;
