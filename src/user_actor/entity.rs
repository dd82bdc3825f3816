use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserPatch};
use super::UserError;

fn validate_email(email: &str) -> Result<(), UserError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(UserError::ValidationError(format!("invalid email: {}", email)))
    }
}

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();
    type Error = UserError;

    const KIND: &'static str = "user";

    fn id(&self) -> &String { &self.id }

    /// Creates a new User from creation parameters.
    ///
    /// # Errors
    /// Rejects emails without an `@`.
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, UserError> {
        validate_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    fn on_update(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            validate_email(&email)?;
            self.email = email;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }
}
