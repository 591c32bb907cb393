use serde::{Deserialize, Serialize};

use crate::resource::{Resource, Validate};

/// A talent listing: a person and a free-form skills line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub name: String,
    pub skills: String,
}

impl Validate for Talent {}

impl Resource for Talent {
    type Input = Talent;
    const KIND: &'static str = "talent";

    fn from_input(input: Talent, _next_id: u64) -> Self { input }
}
