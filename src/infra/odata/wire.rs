use serde::Deserialize;

use crate::domain::entities::person::PersonRow;
use crate::usecase::ports::source::PeoplePage;

/// Body of an entity-set response: `{ "value": [...], "@odata.count": n }`.
#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope {
    #[serde(default)]
    pub value: Vec<PersonRow>,
    #[serde(rename = "@odata.count", default)]
    pub count: Option<u64>,
}

impl From<CollectionEnvelope> for PeoplePage {
    fn from(envelope: CollectionEnvelope) -> Self {
        PeoplePage {
            rows: envelope.value,
            total_count: envelope.count,
        }
    }
}
