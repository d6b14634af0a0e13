use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::domain::entities::criteria::{FilterCriterion, SortCriterion};
use crate::domain::entities::pagination::PageInfo;
use crate::domain::entities::person::PersonRow;
use crate::usecase::ports::source::{FetchError, PeoplePage, PeopleSource};
use crate::usecase::ports::view::ResultsView;
use crate::usecase::services::criteria_form::CriteriaForm;

/// View that keeps everything it was asked to show.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub loading: Vec<bool>,
    pub rows: Vec<PersonRow>,
    pub row_renders: usize,
    pub pagination: Option<PageInfo>,
    pub filter_count: usize,
    pub filter_header_visible: bool,
    pub sort_count: usize,
    pub sort_header_visible: bool,
}

impl ResultsView for RecordingView {
    fn set_loading(&mut self, loading: bool) {
        self.loading.push(loading);
    }

    fn render_rows(&mut self, rows: &[PersonRow]) {
        self.rows = rows.to_vec();
        self.row_renders += 1;
    }

    fn update_pagination(&mut self, info: &PageInfo) {
        self.pagination = Some(info.clone());
    }

    fn render_filter_form(&mut self, form: &CriteriaForm<FilterCriterion>) {
        self.filter_count = form.count();
        self.filter_header_visible = form.header_visible();
    }

    fn render_sort_form(&mut self, form: &CriteriaForm<SortCriterion>) {
        self.sort_count = form.count();
        self.sort_header_visible = form.header_visible();
    }
}

pub(crate) fn people_page(user_names: &[&str], total_count: Option<u64>) -> PeoplePage {
    PeoplePage {
        rows: user_names
            .iter()
            .map(|name| PersonRow {
                user_name: Some(name.to_string()),
                ..PersonRow::default()
            })
            .collect(),
        total_count,
    }
}

/// Source that answers from a queue and remembers every url it was given.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    responses: RefCell<VecDeque<Result<PeoplePage, FetchError>>>,
    pub requested: RefCell<Vec<String>>,
}

impl ScriptedSource {
    pub fn push(&self, response: Result<PeoplePage, FetchError>) {
        self.responses.borrow_mut().push_back(response);
    }
}

#[async_trait(?Send)]
impl PeopleSource for ScriptedSource {
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".to_string())))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod flows {
    use std::rc::Rc;

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::AppConfig;
    use crate::domain::entities::criteria::Column;
    use crate::infra::odata::source::ODataPeopleSource;
    use crate::usecase::services::people_controller::{FetchOutcome, PeopleController};
    use crate::usecase::services::query_service::QueryService;

    fn config_for(service_url: String) -> AppConfig {
        AppConfig {
            service_url,
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn service_requests_the_ticket_url() {
        let source = Rc::new(ScriptedSource::default());
        source.push(Ok(people_page(&["russellwhyte", "scottketchum"], Some(2))));
        let service = QueryService::new(source.clone());
        let mut controller = PeopleController::new(
            &config_for("https://example.test/People".to_string()),
            RecordingView::default(),
        );

        let ticket = controller.start();
        let url = ticket.url().to_string();
        let result = service.fetch(&ticket).await;
        let outcome = controller.finish_fetch(ticket, result);

        assert_eq!(source.requested.borrow().as_slice(), [url]);
        assert_eq!(
            outcome,
            FetchOutcome::Rendered {
                rows: 2,
                total_items: 2
            }
        );
        assert_eq!(controller.view().loading, vec![true, false]);
    }

    #[tokio::test]
    async fn filtered_page_is_fetched_from_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/People"))
            .and(header("accept", "application/json"))
            .and(query_param("$count", "true"))
            .and(query_param("$filter", "FirstName eq 'Scott'"))
            .and(query_param("$top", "5"))
            .and(query_param("$skip", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "@odata.count": 1,
                "value": [
                    {
                        "UserName": "scottketchum",
                        "FirstName": "Scott",
                        "LastName": "Ketchum",
                        "MiddleName": null,
                        "Gender": "Male",
                        "Age": 40
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = QueryService::new(Rc::new(ODataPeopleSource::new()));
        let mut controller = PeopleController::new(
            &config_for(format!("{}/People", server.uri())),
            RecordingView::default(),
        );
        let row = controller.add_filter_row();
        controller.set_filter_column(row, Column::FirstName);
        controller.set_filter_value(row, "Scott".to_string());

        let ticket = controller.submit_filters();
        let result = service.fetch(&ticket).await;
        let outcome = controller.finish_fetch(ticket, result);

        assert!(matches!(outcome, FetchOutcome::Rendered { rows: 1, total_items: 1 }));
        assert_eq!(
            controller.view().rows[0].cells(),
            [
                "scottketchum".to_string(),
                "Scott".to_string(),
                "Ketchum".to_string(),
                "N/A".to_string(),
                "Male".to_string(),
                "40".to_string(),
            ]
        );
        let info = controller.page_info().expect("pagination known");
        assert_eq!(info.label(), "Page 1 of 1");
    }

    #[tokio::test]
    async fn error_status_is_classified_and_table_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/People"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = ODataPeopleSource::new();
        let url = format!("{}/People?$count=true&$top=5&$skip=0", server.uri());
        let direct = source.fetch_page(&url).await;
        assert_eq!(direct, Err(FetchError::Status(503)));

        let service = QueryService::new(Rc::new(source));
        let mut controller = PeopleController::new(
            &config_for(format!("{}/People", server.uri())),
            RecordingView::default(),
        );
        let ticket = controller.start();
        controller.finish_fetch(ticket, Ok(people_page(&["kept"], Some(1))));

        let ticket = controller.refresh();
        let result = service.fetch(&ticket).await;
        let outcome = controller.finish_fetch(ticket, result);

        assert_eq!(outcome, FetchOutcome::Failed(FetchError::Status(503)));
        assert_eq!(controller.view().rows.len(), 1);
        assert_eq!(controller.view().rows[0].user_name.as_deref(), Some("kept"));
        assert_eq!(controller.view().loading.last(), Some(&false));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/People"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = ODataPeopleSource::new()
            .fetch_page(&format!("{}/People", server.uri()))
            .await;

        assert!(
            matches!(result, Err(FetchError::Decode(_))),
            "expected decode error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let result = ODataPeopleSource::new()
            .fetch_page("http://127.0.0.1:9/People")
            .await;

        assert!(
            matches!(result, Err(FetchError::Transport(_))),
            "expected transport error, got {result:?}"
        );
    }
}
