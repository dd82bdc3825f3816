use tracing::{debug, instrument};
use crate::domain::{User, UserCreate, UserPatch};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, user: User) -> Result<String, UserError> {
        debug!("Sending request");
        self.inner.create(UserCreate::from(user)).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(UserError::from)
    }
}
