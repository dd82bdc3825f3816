use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};
use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::checkout::{Clock, PagaCheckout, SystemClock};
use crate::clients::{OrderClient, PaymentClient, PaymentMethodClient, UserClient};
use crate::domain::{Order, Payment, PaymentMethod, User};
use super::{SystemConfig, SystemError};

/// Sequential ids of the form `<prefix>_<n>`, starting at 1.
fn id_sequence(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

fn spawn_actor<T: Entity<Id = String>>(
    config: &SystemConfig,
    prefix: &'static str,
    handles: &mut Vec<tokio::task::JoinHandle<()>>,
) -> ResourceClient<T> {
    let (actor, client) = ResourceActor::<T>::new(config.buffer_size, id_sequence(prefix));
    handles.push(tokio::spawn(actor.run()));
    client
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub user_client: UserClient,
    pub payment_method_client: PaymentMethodClient,
    pub payment_client: PaymentClient,
    pub order_client: OrderClient,
    pub paga_checkout: PagaCheckout,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with default settings and the wall clock.
    pub fn new() -> Self {
        Self::start(&SystemConfig::default(), Arc::new(SystemClock))
    }

    /// Spawns one actor per record type. Must be called inside a Tokio runtime.
    pub fn start(config: &SystemConfig, clock: Arc<dyn Clock>) -> Self {
        info!(buffer_size = config.buffer_size, "Starting order system");
        let mut handles = Vec::new();

        let user_client = UserClient::new(spawn_actor::<User>(config, "user", &mut handles));
        let payment_method_client =
            PaymentMethodClient::new(spawn_actor::<PaymentMethod>(config, "payment_method", &mut handles));
        let order_client = OrderClient::new(
            spawn_actor::<Order>(config, "order", &mut handles),
            user_client.clone(),
        );
        let payment_client = PaymentClient::new(
            spawn_actor::<Payment>(config, "payment", &mut handles),
            order_client.clone(),
            payment_method_client.clone(),
        );

        let paga_checkout = PagaCheckout::new(
            order_client.clone(),
            payment_client.clone(),
            payment_method_client.clone(),
            clock,
        );

        Self {
            user_client,
            payment_method_client,
            payment_client,
            order_client,
            paga_checkout,
            handles,
        }
    }

    /// Drops every client, which closes the actor mailboxes, then waits for
    /// the actors to drain.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Self { user_client, payment_method_client, payment_client, order_client, paga_checkout, handles } = self;
        drop(paga_checkout);
        drop(order_client);
        drop(payment_client);
        drop(payment_method_client);
        drop(user_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Shutdown(format!("{:?}", e)));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
