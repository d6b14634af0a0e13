use std::fmt;

use crate::domain::entities::criteria::{FilterCriterion, SortCriterion};

/// A criterion type that can be edited as a row of a criteria form.
pub trait FormCriterion: Clone + Default {
    const HEADERS: &'static [&'static str];
}

impl FormCriterion for FilterCriterion {
    const HEADERS: &'static [&'static str] = &["Column", "Relation", "Filter Value"];
}

impl FormCriterion for SortCriterion {
    const HEADERS: &'static [&'static str] = &["Column", "Order"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow<C> {
    pub id: RowId,
    pub criterion: C,
}

/// Ordered, editable list of criterion rows backing one popup form.
///
/// The header appears with the first added row and only goes away on
/// [`CriteriaForm::clear`]; deleting every row leaves it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaForm<C> {
    rows: Vec<FormRow<C>>,
    header_visible: bool,
    next_id: u64,
}

impl<C> Default for CriteriaForm<C> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            header_visible: false,
            next_id: 0,
        }
    }
}

impl<C: FormCriterion> CriteriaForm<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &'static [&'static str] {
        C::HEADERS
    }

    pub fn rows(&self) -> &[FormRow<C>] {
        &self.rows
    }

    /// The number shown next to the form's trigger.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn add_row(&mut self) -> RowId {
        self.header_visible = true;
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(FormRow {
            id,
            criterion: C::default(),
        });
        id
    }

    pub fn delete_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    pub fn update_row(&mut self, id: RowId, edit: impl FnOnce(&mut C)) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                edit(&mut row.criterion);
                true
            }
            None => false,
        }
    }

    /// Full re-scan of the rows, in display order.
    pub fn criteria(&self) -> Vec<C> {
        self.rows.iter().map(|row| row.criterion.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.header_visible = false;
    }
}
