use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::domain::entities::criteria::{
    Column, FilterCriterion, Relation, SortCriterion, SortOrder,
};
use crate::domain::entities::pagination::PageInfo;
use crate::domain::entities::query::QueryState;
use crate::usecase::ports::source::{FetchError, PeoplePage};
use crate::usecase::ports::view::ResultsView;
use crate::usecase::services::criteria_form::{CriteriaForm, RowId};
use crate::usecase::services::query_builder::build_query_url;

/// One issued request. Only the ticket with the newest sequence number is
/// allowed to touch the view when it completes, and the page it asked for
/// becomes current only then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: u64,
    url: String,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Rendered { rows: usize, total_items: u64 },
    Superseded,
    Failed(FetchError),
}

/// Owns the query state and both criteria forms, and pushes every change
/// through a [`ResultsView`].
pub struct PeopleController<V> {
    service_url: String,
    page_links: u64,
    reset_page_on_submit: bool,
    state: QueryState,
    filter_form: CriteriaForm<FilterCriterion>,
    sort_form: CriteriaForm<SortCriterion>,
    page_info: Option<PageInfo>,
    latest_seq: u64,
    view: V,
}

impl<V: ResultsView> PeopleController<V> {
    pub fn new(config: &AppConfig, view: V) -> Self {
        Self {
            service_url: config.service_url.clone(),
            page_links: config.page_links,
            reset_page_on_submit: config.reset_page_on_submit,
            state: QueryState::new(config.page_size),
            filter_form: CriteriaForm::new(),
            sort_form: CriteriaForm::new(),
            page_info: None,
            latest_seq: 0,
            view,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Pagination as of the last applied response.
    #[cfg(test)]
    pub fn page_info(&self) -> Option<&PageInfo> {
        self.page_info.as_ref()
    }

    /// Paints the empty forms and issues the first request.
    pub fn start(&mut self) -> FetchTicket {
        self.view.render_filter_form(&self.filter_form);
        self.view.render_sort_form(&self.sort_form);
        self.begin_fetch()
    }

    /// Requests the current page again with the current criteria.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.begin_fetch_for(self.state.page())
    }

    fn begin_fetch_for(&mut self, page: u64) -> FetchTicket {
        let mut requested = self.state.clone();
        requested.set_page(page);

        self.latest_seq += 1;
        let url = build_query_url(&self.service_url, &requested);
        self.view.set_loading(true);
        FetchTicket {
            seq: self.latest_seq,
            page: requested.page(),
            url,
        }
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<PeoplePage, FetchError>,
    ) -> FetchOutcome {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                ok = result.is_ok(),
                "discarding superseded response"
            );
            return FetchOutcome::Superseded;
        }

        self.view.set_loading(false);

        match result {
            Ok(page) => {
                self.state.set_page(ticket.page);
                let total_items = page.total_or_row_count();
                debug!(total_items, "total count from server");
                self.view.render_rows(&page.rows);

                let info = PageInfo::compute(
                    self.state.page(),
                    total_items,
                    self.state.page_size(),
                    self.page_links,
                );
                self.view.update_pagination(&info);
                self.page_info = Some(info);

                FetchOutcome::Rendered {
                    rows: page.rows.len(),
                    total_items,
                }
            }
            Err(err) => {
                error!(
                    seq = ticket.seq,
                    url = %ticket.url,
                    page = self.state.page(),
                    "error fetching people: {err}"
                );
                FetchOutcome::Failed(err)
            }
        }
    }

    pub fn refresh(&mut self) -> FetchTicket {
        self.begin_fetch_for(1)
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        let page = self.state.page();
        if page <= 1 {
            return None;
        }
        Some(self.begin_fetch_for(page - 1))
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        let page = self.state.page();
        if page >= self.known_total_pages() {
            return None;
        }
        Some(self.begin_fetch_for(page + 1))
    }

    pub fn go_to_page(&mut self, page: u64) -> Option<FetchTicket> {
        if page == 0 || page > self.known_total_pages() {
            return None;
        }
        info!(page, "jumping to page");
        Some(self.begin_fetch_for(page))
    }

    fn known_total_pages(&self) -> u64 {
        self.page_info
            .as_ref()
            .map(|info| info.total_pages)
            .unwrap_or(0)
    }

    pub fn add_filter_row(&mut self) -> RowId {
        let id = self.filter_form.add_row();
        self.sync_filters();
        id
    }

    pub fn delete_filter_row(&mut self, id: RowId) {
        self.filter_form.delete_row(id);
        self.sync_filters();
    }

    pub fn set_filter_column(&mut self, id: RowId, column: Column) {
        self.filter_form.update_row(id, |filter| filter.column = column);
        self.sync_filters();
    }

    pub fn set_filter_relation(&mut self, id: RowId, relation: Relation) {
        self.filter_form.update_row(id, |filter| filter.relation = relation);
        self.sync_filters();
    }

    pub fn set_filter_value(&mut self, id: RowId, value: String) {
        self.filter_form.update_row(id, |filter| filter.value = value);
        self.sync_filters();
    }

    pub fn submit_filters(&mut self) -> FetchTicket {
        self.sync_filters();
        self.submit()
    }

    pub fn reset_filters(&mut self) -> FetchTicket {
        info!("resetting filter criteria");
        self.filter_form.clear();
        self.sync_filters();
        self.begin_fetch()
    }

    pub fn add_sort_row(&mut self) -> RowId {
        let id = self.sort_form.add_row();
        self.sync_sorts();
        id
    }

    pub fn delete_sort_row(&mut self, id: RowId) {
        self.sort_form.delete_row(id);
        self.sync_sorts();
    }

    pub fn set_sort_column(&mut self, id: RowId, column: Column) {
        self.sort_form.update_row(id, |sort| sort.column = column);
        self.sync_sorts();
    }

    pub fn set_sort_order(&mut self, id: RowId, order: SortOrder) {
        self.sort_form.update_row(id, |sort| sort.order = order);
        self.sync_sorts();
    }

    pub fn submit_sorts(&mut self) -> FetchTicket {
        self.sync_sorts();
        self.submit()
    }

    pub fn reset_sorts(&mut self) -> FetchTicket {
        info!("resetting sort criteria");
        self.sort_form.clear();
        self.sync_sorts();
        self.begin_fetch()
    }

    fn submit(&mut self) -> FetchTicket {
        if self.reset_page_on_submit {
            self.begin_fetch_for(1)
        } else {
            self.begin_fetch()
        }
    }

    fn sync_filters(&mut self) {
        self.state.filters = self.filter_form.criteria();
        self.view.render_filter_form(&self.filter_form);
    }

    fn sync_sorts(&mut self) {
        self.state.sorts = self.sort_form.criteria();
        self.view.render_sort_form(&self.sort_form);
    }
}
