use serde::{Deserialize, Serialize};

use crate::resource::{Resource, Validate};

/// Co-creation feedback entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
}

impl Validate for Feedback {}

impl Resource for Feedback {
    type Input = Feedback;
    const KIND: &'static str = "feedback";

    fn from_input(input: Feedback, _next_id: u64) -> Self { input }
}
