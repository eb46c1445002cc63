pub mod config;
pub mod fs;
pub mod selector;

pub use crate::fs::fsf_ref::FsfRef;
pub use crate::selector::file_selector::{Activation, FileSelector, SelectorPurpose};
pub use crate::selector::selector_error::SelectorError;
