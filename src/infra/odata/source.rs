use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::infra::odata::wire::CollectionEnvelope;
use crate::usecase::ports::source::{FetchError, PeoplePage, PeopleSource};

/// Reads People pages over HTTP. The url, query options included, is built
/// by the caller.
#[derive(Clone, Default)]
pub struct ODataPeopleSource {
    client: reqwest::Client,
}

impl ODataPeopleSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl PeopleSource for ODataPeopleSource {
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let envelope: CollectionEnvelope =
            serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))?;

        Ok(envelope.into())
    }
}
