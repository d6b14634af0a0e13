pub mod criteria_form;
pub mod people_controller;
pub mod query_builder;
pub mod query_service;
