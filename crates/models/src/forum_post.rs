use serde::{Deserialize, Serialize};

use crate::resource::{Resource, Validate};

fn anonymous() -> String { "Anonymous".to_string() }

/// A forum post. Posts carry no identifier; the input is stored as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    #[serde(default = "anonymous")]
    pub user: String,
    pub text: String,
}

impl Validate for ForumPost {}

impl Resource for ForumPost {
    type Input = ForumPost;
    const KIND: &'static str = "forum_posts";

    fn from_input(input: ForumPost, _next_id: u64) -> Self { input }
}
