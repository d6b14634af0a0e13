use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} option: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A property of the People entity set, named as the service names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    UserName,
    FirstName,
    LastName,
    MiddleName,
    Gender,
    Age,
}

impl Column {
    pub const FILTERABLE: [Column; 4] = [
        Column::UserName,
        Column::FirstName,
        Column::LastName,
        Column::Gender,
    ];

    pub const SORTABLE: [Column; 6] = [
        Column::UserName,
        Column::FirstName,
        Column::LastName,
        Column::MiddleName,
        Column::Gender,
        Column::Age,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::UserName => "UserName",
            Column::FirstName => "FirstName",
            Column::LastName => "LastName",
            Column::MiddleName => "MiddleName",
            Column::Gender => "Gender",
            Column::Age => "Age",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::UserName => "User Name",
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::MiddleName => "Middle Name",
            Column::Gender => "Gender",
            Column::Age => "Age",
        }
    }
}

impl FromStr for Column {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Column::SORTABLE
            .into_iter()
            .find(|column| column.key() == value)
            .ok_or_else(|| UnknownOption::new("column", value))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    GreaterThan,
    LessThan,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Equal, Relation::GreaterThan, Relation::LessThan];

    /// Comparison operator keyword used inside `$filter`.
    pub fn keyword(self) -> &'static str {
        match self {
            Relation::Equal => "eq",
            Relation::GreaterThan => "gt",
            Relation::LessThan => "lt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Relation::Equal => "Equal",
            Relation::GreaterThan => "Greater Than",
            Relation::LessThan => "Less Than",
        }
    }
}

impl FromStr for Relation {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|relation| relation.keyword() == value)
            .ok_or_else(|| UnknownOption::new("relation", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

    /// Direction keyword used inside `$orderby`.
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.keyword() == value)
            .ok_or_else(|| UnknownOption::new("sort order", value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriterion {
    pub column: Column,
    pub relation: Relation,
    pub value: String,
}

impl Default for FilterCriterion {
    fn default() -> Self {
        Self {
            column: Column::FILTERABLE[0],
            relation: Relation::Equal,
            value: String::new(),
        }
    }
}

impl FilterCriterion {
    /// Renders `<column> <relation> '<value>'`. Quotes inside `value` are
    /// passed through untouched.
    pub fn clause(&self) -> String {
        format!(
            "{} {} '{}'",
            self.column.key(),
            self.relation.keyword(),
            self.value
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriterion {
    pub column: Column,
    pub order: SortOrder,
}

impl Default for SortCriterion {
    fn default() -> Self {
        Self {
            column: Column::SORTABLE[0],
            order: SortOrder::Ascending,
        }
    }
}

impl SortCriterion {
    pub fn clause(&self) -> String {
        format!("{} {}", self.column.key(), self.order.keyword())
    }
}
