use chrono::Local;
use dioxus::prelude::*;

use crate::domain::entities::criteria::{FilterCriterion, SortCriterion};
use crate::domain::entities::pagination::PageInfo;
use crate::domain::entities::person::PersonRow;
use crate::usecase::ports::view::ResultsView;
use crate::usecase::services::criteria_form::CriteriaForm;

/// Reactive mirror of what the controller renders, plus popup visibility
/// which only the UI cares about.
#[derive(Clone, Copy)]
pub struct AppState {
    pub rows: Signal<Vec<PersonRow>>,
    pub loading: Signal<bool>,
    pub pagination: Signal<PageInfo>,
    pub filter_form: Signal<CriteriaForm<FilterCriterion>>,
    pub sort_form: Signal<CriteriaForm<SortCriterion>>,
    pub show_filter_popup: Signal<bool>,
    pub show_sort_popup: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rows: use_signal(Vec::<PersonRow>::new),
            loading: use_signal(|| false),
            pagination: use_signal(PageInfo::default),
            filter_form: use_signal(CriteriaForm::<FilterCriterion>::new),
            sort_form: use_signal(CriteriaForm::<SortCriterion>::new),
            show_filter_popup: use_signal(|| false),
            show_sort_popup: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}

impl ResultsView for AppState {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn render_rows(&mut self, rows: &[PersonRow]) {
        self.rows.set(rows.to_vec());
    }

    fn update_pagination(&mut self, info: &PageInfo) {
        let shown = self.rows.peek().len();
        self.status.set(format!(
            "Showing {shown} of {} | updated {}",
            info.total_items,
            Local::now().format("%H:%M:%S")
        ));
        self.pagination.set(info.clone());
    }

    fn render_filter_form(&mut self, form: &CriteriaForm<FilterCriterion>) {
        self.filter_form.set(form.clone());
    }

    fn render_sort_form(&mut self, form: &CriteriaForm<SortCriterion>) {
        self.sort_form.set(form.clone());
    }
}
