pub mod file_selector;
pub mod selector_error;
