use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use log::{error, warn};

use crate::fs::dir_entry::DirEntry;
use crate::fs::filesystem_front::FilesystemFront;

pub enum Record {
    File,
    /*
    PathBuf represents here only the *last* component of full PathBuf
     */
    Dir(HashMap<PathBuf, Record>),
}

impl Record {
    // If creating == true, it creates a Dir, but since it returns a mut ref you can immediately
    // override it with File.
    fn get_mut(&mut self, path: &[Component], creating: bool) -> Option<&mut Record> {
        if path.is_empty() {
            Some(self)
        } else {
            let first = PathBuf::new().join(path[0]);
            match self {
                Record::File => None,
                Record::Dir(ref mut items) => {
                    if items.contains_key(&first) {
                        return items.get_mut(&first).unwrap().get_mut(&path[1..], creating);
                    }

                    if creating {
                        items.insert(first.clone(), Record::Dir(HashMap::new()));
                        return items.get_mut(&first).unwrap().get_mut(&path[1..], creating);
                    }

                    None
                }
            }
        }
    }

    fn get(&self, path: &[Component]) -> Option<&Record> {
        if path.is_empty() {
            Some(self)
        } else {
            let first = PathBuf::new().join(path[0]);
            match self {
                Record::File => None,
                Record::Dir(ref items) => items.get(&first).map(|r| r.get(&path[1..])).flatten(),
            }
        }
    }

    fn is_empty_dir(&self) -> bool {
        match &self {
            Record::File => false,
            Record::Dir(contents) => contents.is_empty(),
        }
    }

    fn is_dir(&self) -> bool {
        match &self {
            Record::File => false,
            Record::Dir(_contents) => true,
        }
    }

    fn create_dir(&mut self, path: &Path) -> bool {
        let components: Vec<Component> = path.components().collect();

        if self.get(&components).is_some() {
            return false;
        }

        self.get_mut(&components, true).is_some()
    }

    fn create_file(&mut self, path: &Path) -> bool {
        let components: Vec<Component> = path.components().collect();

        if self.get(&components).is_some() {
            return false;
        }

        self.get_mut(&components, true)
            .map(|maybe_last| {
                if maybe_last.is_empty_dir() {
                    *maybe_last = Record::File;
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false)
    }

    fn list(&self) -> Option<Vec<PathBuf>> {
        match self {
            Record::File => None,
            Record::Dir(e) => {
                let names: Vec<_> = e.keys().cloned().collect();
                Some(names)
            }
        }
    }
}

/*
In-memory filesystem for tests and embedding hosts. Builder methods take paths
relative to the mock's root, the capability methods take absolute paths - same
contract the live filesystem honors.
 */
pub struct MockFS {
    root_path: PathBuf,
    root_dir: RwLock<Record>,
}

impl MockFS {
    pub fn new<T: Into<PathBuf>>(root_path: T) -> Self {
        MockFS {
            root_path: root_path.into(),
            root_dir: RwLock::new(Record::Dir(HashMap::default())),
        }
    }

    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref())
            .unwrap_or_else(|_| error!("failed creating file in mockfs"));
        self
    }

    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_dir(path.as_ref())
            .unwrap_or_else(|_| error!("failed creating dir in mockfs"));
        self
    }

    pub fn add_dir(&self, path: &Path) -> Result<(), ()> {
        if self.root_dir.try_write().unwrap().create_dir(path) {
            Ok(())
        } else {
            Err(())
        }
    }

    pub fn add_file(&self, path: &Path) -> Result<(), ()> {
        if self.root_dir.try_write().unwrap().create_file(path) {
            Ok(())
        } else {
            Err(())
        }
    }

    // The capability speaks absolute paths, the record tree is rooted at root_path.
    fn relative<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.root_path).ok()
    }
}

impl Debug for MockFS {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockFilesystem({})", self.root_path.to_string_lossy())
    }
}

impl FilesystemFront for MockFS {
    fn root_path(&self) -> &PathBuf {
        &self.root_path
    }

    fn is_dir(&self, path: &Path) -> bool {
        let rel = match self.relative(path) {
            Some(r) => r,
            None => return false,
        };

        let comp: Vec<_> = rel.components().collect();
        self.root_dir.read().unwrap().get(&comp).map(|r| r.is_dir()).unwrap_or(false)
    }

    fn list_entries(&self, directory: &Path) -> Vec<DirEntry> {
        let rel = match self.relative(directory) {
            Some(r) => r,
            None => {
                warn!("listing {:?} outside mock root {:?}", directory, self.root_path);
                return Vec::new();
            }
        };

        let comp: Vec<_> = rel.components().collect();
        let items = match self.root_dir.read().unwrap().get(&comp) {
            Some(record) => record.list(),
            None => {
                error!("listing {:?} that does not exist", directory);
                return Vec::new();
            }
        };

        match items {
            Some(mut names) => {
                names.sort();
                names.into_iter().map(DirEntry::new).collect()
            }
            None => {
                error!("listing {:?} that is not a dir", directory);
                Vec::new()
            }
        }
    }

    fn path_separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }
}
