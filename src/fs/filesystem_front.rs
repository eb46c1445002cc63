use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::fs::dir_entry::DirEntry;
use crate::fs::fsf_ref::FsfRef;

/*
All paths crossing this boundary are absolute. Implementations never fail loudly:
a path that cannot be inspected is "not a directory", a directory that cannot be
read lists as empty. A permission error mid-browse must not take down the dialog.
 */
pub trait FilesystemFront: Debug {
    /*
    The navigation ceiling (a drive, or "/"). Compared by equality against a
    normalized directory path to detect "cannot go further up".
     */
    fn root_path(&self) -> &PathBuf;

    fn is_dir(&self, path: &Path) -> bool;

    // Entry names, not full paths. Order is whatever the underlying source yields.
    fn list_entries(&self, directory: &Path) -> Vec<DirEntry>;

    fn path_separator(&self) -> char;

    fn to_fsf(self) -> FsfRef
    where
        Self: Sized + 'static,
    {
        FsfRef::new(self)
    }
}
