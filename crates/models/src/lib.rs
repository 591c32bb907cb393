//! Resource schemas exchanged with clients and held by the service stores.

pub mod errors;
pub mod resource;
pub mod user;
pub mod campaign;
pub mod forum_post;
pub mod talent;
pub mod feedback;

pub use campaign::{Campaign, CampaignCreate};
pub use feedback::Feedback;
pub use forum_post::ForumPost;
pub use resource::{Resource, Validate};
pub use talent::Talent;
pub use user::{User, UserCreate};
