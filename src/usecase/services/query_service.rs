use std::rc::Rc;

use tracing::{debug, info};

use crate::usecase::ports::source::{FetchError, PeoplePage, PeopleSource};
use crate::usecase::services::people_controller::FetchTicket;

#[derive(Clone)]
pub struct QueryService {
    source: Rc<dyn PeopleSource>,
}

impl QueryService {
    pub fn new(source: Rc<dyn PeopleSource>) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, ticket: &FetchTicket) -> Result<PeoplePage, FetchError> {
        info!(
            seq = ticket.seq(),
            page = ticket.page(),
            url = %ticket.url(),
            "fetching people"
        );
        let page = self.source.fetch_page(ticket.url()).await?;
        debug!(
            seq = ticket.seq(),
            rows = page.rows.len(),
            total = ?page.total_count,
            "people page received"
        );
        Ok(page)
    }
}
