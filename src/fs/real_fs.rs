use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

use log::{error, warn};

use crate::fs::dir_entry::DirEntry;
use crate::fs::filesystem_front::FilesystemFront;

pub struct RealFS {
    root_path: PathBuf,
}

impl RealFS {
    pub fn new() -> RealFS {
        RealFS {
            root_path: default_root(),
        }
    }

    // For hosts that want a navigation ceiling other than the platform root.
    pub fn with_root(root_path: PathBuf) -> RealFS {
        RealFS { root_path }
    }
}

impl Default for RealFS {
    fn default() -> Self {
        RealFS::new()
    }
}

#[cfg(windows)]
fn default_root() -> PathBuf {
    match std::env::var_os("SystemDrive") {
        Some(mut drive) => {
            drive.push("\\");
            PathBuf::from(drive)
        }
        None => {
            warn!("SystemDrive not set, falling back to C:\\");
            PathBuf::from("C:\\")
        }
    }
}

#[cfg(not(windows))]
fn default_root() -> PathBuf {
    PathBuf::from("/")
}

impl Debug for RealFS {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RealFS({})", self.root_path.to_string_lossy())
    }
}

impl FilesystemFront for RealFS {
    fn root_path(&self) -> &PathBuf {
        &self.root_path
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, directory: &Path) -> Vec<DirEntry> {
        let readdir = match std::fs::read_dir(directory) {
            Ok(r) => r,
            Err(e) => {
                error!(target: "fs", "failed to read_dir {:?} because {}", directory, e);
                return Vec::new();
            }
        };

        let mut items: Vec<DirEntry> = Vec::new();
        for item in readdir {
            match item {
                Ok(dir_entry) => match dir_entry.path().file_name() {
                    Some(file_name) => {
                        items.push(DirEntry::new(file_name));
                    }
                    None => {
                        warn!("received dir_entry {:?} that does not have file_name, ignoring.", dir_entry);
                    }
                },
                Err(e) => {
                    error!(target: "fs", "failed reading dir_entry in {:?} because {}, skipping", directory, e);
                }
            }
        }
        items
    }

    fn path_separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }
}
