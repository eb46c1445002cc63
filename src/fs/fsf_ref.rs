use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::fs::dir_entry::DirEntry;
use crate::fs::filesystem_front::FilesystemFront;

/*
Shared handle to a filesystem capability. Cheap to clone, so several dialogs can
browse the same (mock or real) filesystem. Nothing behind it is ever mutated
through this handle.
 */
#[derive(Clone)]
pub struct FsfRef {
    fs: Arc<dyn FilesystemFront>,
}

impl Debug for FsfRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FsfRef({:?})", self.fs)
    }
}

impl FsfRef {
    pub fn new<FS: FilesystemFront + 'static>(fs: FS) -> Self {
        FsfRef { fs: Arc::new(fs) }
    }

    pub fn root_path(&self) -> &PathBuf {
        self.fs.root_path()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.fs.is_dir(path)
    }

    pub fn list_entries(&self, directory: &Path) -> Vec<DirEntry> {
        self.fs.list_entries(directory)
    }

    pub fn path_separator(&self) -> char {
        self.fs.path_separator()
    }
}
