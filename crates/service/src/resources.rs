//! One store per resource kind, owned by whoever serves the API.

use std::sync::Arc;

use models::{Campaign, Feedback, ForumPost, Resource, Talent, User, Validate};

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// The five independent resource stores. Cloning shares the same stores.
#[derive(Clone, Default)]
pub struct ResourceStores {
    pub users: Arc<ResourceStore<User>>,
    pub campaigns: Arc<ResourceStore<Campaign>>,
    pub forum_posts: Arc<ResourceStore<ForumPost>>,
    pub talent: Arc<ResourceStore<Talent>>,
    pub feedback: Arc<ResourceStore<Feedback>>,
}

impl ResourceStores {
    pub fn new() -> Self { Self::default() }
}

/// Validate `input` and, only if it passes, append it to `store`.
pub async fn create_checked<R: Resource>(
    store: &ResourceStore<R>,
    input: R::Input,
) -> Result<R, ServiceError> {
    input.validate()?;
    Ok(store.create(input).await)
}
