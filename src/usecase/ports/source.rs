use async_trait::async_trait;

use crate::domain::entities::person::PersonRow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP Error! Status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// One page of rows plus the total the service reported, if it did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeoplePage {
    pub rows: Vec<PersonRow>,
    pub total_count: Option<u64>,
}

impl PeoplePage {
    /// Total used for page math; falls back to the rows on hand.
    pub fn total_or_row_count(&self) -> u64 {
        self.total_count.unwrap_or(self.rows.len() as u64)
    }
}

#[async_trait(?Send)]
pub trait PeopleSource {
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, FetchError>;
}
