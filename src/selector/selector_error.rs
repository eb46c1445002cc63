use thiserror::Error;

use crate::fs::path::PathResolutionError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /*
    The supplied or navigated-to path cannot be resolved to absolute form.
    Fatal to the operation, not to the dialog - prior listing state survives.
     */
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),

    // Contract violation: the UI surface passed an index it never rendered.
    #[error("activation index {index} out of range, listing has {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
