pub mod criteria;
pub mod pagination;
pub mod person;
pub mod query;
