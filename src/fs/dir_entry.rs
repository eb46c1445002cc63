use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct DirEntry {
    file_name: PathBuf,
}

impl DirEntry {
    pub fn new<P: Into<PathBuf>>(file_name: P) -> DirEntry {
        DirEntry {
            file_name: file_name.into(),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.file_name
    }

    // Entry names are not guaranteed to be valid unicode, the listing is display text anyway.
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().to_string()
    }
}

#[macro_export]
macro_rules! de {
    ( $name:expr ) => {{
        crate::fs::dir_entry::DirEntry::new($name)
    }};
}
