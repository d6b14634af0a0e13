use crate::domain::entities::criteria::{FilterCriterion, SortCriterion};
use crate::domain::entities::pagination::PageInfo;
use crate::domain::entities::person::PersonRow;
use crate::usecase::services::criteria_form::CriteriaForm;

/// Everything the controller is allowed to do to the screen.
pub trait ResultsView {
    fn set_loading(&mut self, loading: bool);
    /// Replaces every rendered row.
    fn render_rows(&mut self, rows: &[PersonRow]);
    fn update_pagination(&mut self, info: &PageInfo);
    fn render_filter_form(&mut self, form: &CriteriaForm<FilterCriterion>);
    fn render_sort_form(&mut self, form: &CriteriaForm<SortCriterion>);
}
