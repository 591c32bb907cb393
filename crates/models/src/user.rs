use serde::{Deserialize, Serialize};

use crate::errors::{require_non_empty, ModelError};
use crate::resource::{Resource, Validate};

/// A registered user. `id` is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Create input: no id, the server assigns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        Ok(())
    }
}

impl Resource for User {
    type Input = UserCreate;
    const KIND: &'static str = "users";

    fn from_input(input: UserCreate, next_id: u64) -> Self {
        Self { id: next_id, name: input.name, email: input.email }
    }

    fn id(&self) -> Option<u64> { Some(self.id) }
}
