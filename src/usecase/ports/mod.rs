pub mod source;
pub mod view;
