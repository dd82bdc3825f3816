//! Typed handles over the resource actors.

#[macro_use]
mod macros;

pub mod user_client;
pub mod payment_method_client;
pub mod payment_client;
pub mod order_client;

pub use user_client::UserClient;
pub use payment_method_client::PaymentMethodClient;
pub use payment_client::PaymentClient;
pub use order_client::OrderClient;
