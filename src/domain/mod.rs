pub mod user;
pub mod order;
pub mod payment;
pub mod payment_method;

pub use user::*;
pub use order::*;
pub use payment::*;
pub use payment_method::*;

/// Monetary amounts. Decimal keeps totals exact.
pub type Money = rust_decimal::Decimal;
