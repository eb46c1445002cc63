pub mod labels;
pub mod load_error;
pub mod save_error;
