use crate::domain::entities::criteria::{FilterCriterion, SortCriterion};

/// Everything the query builder reads when a request is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub filters: Vec<FilterCriterion>,
    pub sorts: Vec<SortCriterion>,
    page: u64,
    page_size: u64,
}

impl QueryState {
    pub fn new(page_size: u64) -> Self {
        Self {
            filters: Vec::new(),
            sorts: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Pages are 1-based; anything lower lands on the first page.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}
