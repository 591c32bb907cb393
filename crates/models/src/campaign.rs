use serde::{Deserialize, Serialize};

use crate::resource::{Resource, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCreate {
    pub name: String,
}

impl Validate for CampaignCreate {}

impl Resource for Campaign {
    type Input = CampaignCreate;
    const KIND: &'static str = "campaigns";

    fn from_input(input: CampaignCreate, next_id: u64) -> Self {
        Self { id: next_id, name: input.name }
    }

    fn id(&self) -> Option<u64> { Some(self.id) }
}
