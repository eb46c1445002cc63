use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::config::labels::Labels;
use crate::fs::fsf_ref::FsfRef;
use crate::fs::path::normalize;
use crate::selector::selector_error::SelectorError;

// Synthetic first listing entry that navigates to the parent directory.
pub const PARENT_ENTRY: &str = "..";

pub type ChooseHandler = Box<dyn FnMut(&Path, &str)>;
pub type CloseHandler = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPurpose {
    Open,
    Save,
}

/*
Result of activating a listing index. Descended means the listing was already
rebuilt for the new directory and the list view should reset its highlight;
File is a terminal pick, nothing changed beyond the recorded selection.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Descended(PathBuf),
    File(PathBuf),
}

impl Activation {
    pub fn is_descend(&self) -> bool {
        matches!(self, Activation::Descended(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            Activation::Descended(path) => path,
            Activation::File(path) => path,
        }
    }
}

/*
The dialog core: tracks current directory, its listing and the pending
selection over a pluggable filesystem. One instance per dialog, owned by the
rendering surface which queries it once per frame and reports activations.
Rendering itself lives entirely on the other side of this boundary.
 */
pub struct FileSelector {
    start_path: PathBuf,
    purpose: SelectorPurpose,

    current_directory: PathBuf,
    listing: Vec<String>,
    selected_index: Option<usize>,
    selection: String,

    labels: Labels,
    on_choose: Option<ChooseHandler>,
    on_close: Option<CloseHandler>,

    fsf: FsfRef,
}

impl Debug for FileSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FileSelector({:?} at {})", self.purpose, self.current_directory.to_string_lossy())
    }
}

impl FileSelector {
    pub fn open<P: AsRef<Path>>(start_path: P, fsf: FsfRef) -> Result<Self, SelectorError> {
        Self::new(start_path.as_ref(), SelectorPurpose::Open, fsf)
    }

    pub fn save<P: AsRef<Path>>(start_path: P, fsf: FsfRef) -> Result<Self, SelectorError> {
        Self::new(start_path.as_ref(), SelectorPurpose::Save, fsf)
    }

    fn new(start_path: &Path, purpose: SelectorPurpose, fsf: FsfRef) -> Result<Self, SelectorError> {
        let mut selector = FileSelector {
            start_path: start_path.to_path_buf(),
            purpose,
            current_directory: PathBuf::new(),
            listing: Vec::new(),
            selected_index: None,
            selection: String::new(),
            labels: Labels::default(),
            on_choose: None,
            on_close: None,
            fsf,
        };

        selector.rebuild(start_path)?;
        Ok(selector)
    }

    pub fn with_labels(self, labels: Labels) -> Self {
        Self { labels, ..self }
    }

    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    pub fn with_on_choose(self, on_choose: ChooseHandler) -> Self {
        Self {
            on_choose: Some(on_choose),
            ..self
        }
    }

    pub fn set_on_choose(&mut self, on_choose: Option<ChooseHandler>) {
        self.on_choose = on_choose;
    }

    pub fn with_on_close(self, on_close: CloseHandler) -> Self {
        Self {
            on_close: Some(on_close),
            ..self
        }
    }

    pub fn set_on_close(&mut self, on_close: Option<CloseHandler>) {
        self.on_close = on_close;
    }

    /*
    Repoints the selector at a directory: normalizes the path, then replaces
    current_directory and the listing wholesale - with the parent entry first,
    unless the directory is the capability root. Transactional: on a resolution
    failure nothing is published, the previous listing stays good. A directory
    that merely cannot be read is not a failure, it lists as empty.
     */
    pub fn rebuild(&mut self, path: &Path) -> Result<(), SelectorError> {
        let directory = normalize(path)?;

        let mut listing: Vec<String> = Vec::new();
        if directory != *self.fsf.root_path() {
            listing.push(PARENT_ENTRY.to_string());
        }
        for entry in self.fsf.list_entries(&directory) {
            listing.push(entry.display_name());
        }

        debug!("rebuilt listing for {:?}, {} items", directory, listing.len());

        self.current_directory = directory;
        self.listing = listing;
        Ok(())
    }

    /*
    The consumer reports that the operator picked listing index `index`.
    Records the selection, resolves it against the current directory (the
    parent entry collapses lexically to the actual parent), then either
    descends - rebuilding the listing before returning - or reports a terminal
    file pick, leaving directory and listing untouched.
     */
    pub fn activate_index(&mut self, index: usize) -> Result<Activation, SelectorError> {
        if index >= self.listing.len() {
            error!("activation index {} out of range, listing has {} items", index, self.listing.len());
            return Err(SelectorError::IndexOutOfRange {
                index,
                len: self.listing.len(),
            });
        }

        self.selection = self.listing[index].clone();
        self.selected_index = Some(index);

        let resolved = normalize(&self.current_directory.join(&self.selection))?;

        if self.fsf.is_dir(&resolved) {
            self.rebuild(&resolved)?;
            Ok(Activation::Descended(resolved))
        } else {
            Ok(Activation::File(resolved))
        }
    }

    pub fn label(&self) -> String {
        match self.purpose {
            SelectorPurpose::Open => format!("{} File", self.labels.open_button),
            SelectorPurpose::Save => format!("{} File", self.labels.save_button),
        }
    }

    // Fired by the rendering surface's confirm button. A no-op without a handler.
    pub fn choose_pressed(&mut self) {
        if let Some(handler) = self.on_choose.as_mut() {
            handler(&self.current_directory, &self.selection);
        }
    }

    // Fired by the rendering surface's close button. A no-op without a handler.
    pub fn close_pressed(&mut self) {
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }

    pub fn start_path(&self) -> &Path {
        &self.start_path
    }

    pub fn purpose(&self) -> SelectorPurpose {
        self.purpose
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    /*
    Index of the last activation. Valid at the moment it was set, but stale the
    instant the listing is rebuilt - consumers derive state from the Activation
    result, never by caching this across a descend.
     */
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use crate::config::labels::Labels;
    use crate::fs::filesystem_front::FilesystemFront;
    use crate::fs::fsf_ref::FsfRef;
    use crate::fs::mock_fs::MockFS;
    use crate::selector::file_selector::{Activation, FileSelector, SelectorPurpose};
    use crate::selector::selector_error::SelectorError;

    /*
    /
    ├── a
    │   ├── b
    │   │   ├── c
    │   │   └── file1.txt
    │   └── file2.txt
    └── file3.txt
     */
    fn fixture_fs() -> FsfRef {
        MockFS::new("/")
            .with_file("a/b/file1.txt")
            .with_dir("a/b/c")
            .with_file("a/file2.txt")
            .with_file("file3.txt")
            .to_fsf()
    }

    #[test]
    fn open_lists_start_directory() {
        let selector = FileSelector::open("/", fixture_fs()).unwrap();

        assert_eq!(selector.purpose(), SelectorPurpose::Open);
        assert_eq!(selector.current_directory(), Path::new("/"));
        assert_eq!(selector.start_path(), Path::new("/"));
        assert_eq!(selector.listing(), &["a".to_string(), "file3.txt".to_string()]);
        assert_eq!(selector.selected_index(), None);
        assert_eq!(selector.selection(), "");
    }

    #[test]
    fn no_parent_entry_at_root() {
        let selector = FileSelector::open("/", fixture_fs()).unwrap();
        assert!(!selector.listing().contains(&"..".to_string()));
    }

    #[test]
    fn parent_entry_below_root() {
        let selector = FileSelector::open("/a", fixture_fs()).unwrap();
        assert_eq!(selector.listing(), &["..".to_string(), "b".to_string(), "file2.txt".to_string()]);
    }

    #[test]
    fn parent_entry_with_non_default_root() {
        let fsf = MockFS::new("/base").with_file("x.txt").to_fsf();

        let at_root = FileSelector::open("/base", fsf).unwrap();
        assert_eq!(at_root.listing(), &["x.txt".to_string()]);
    }

    #[test]
    fn start_path_is_normalized() {
        let selector = FileSelector::open("/a/b/./c/..", fixture_fs()).unwrap();
        assert_eq!(selector.current_directory(), Path::new("/a/b"));
    }

    #[test]
    fn unreadable_start_directory_is_not_an_error() {
        let selector = FileSelector::open("/no_such_dir", fixture_fs()).unwrap();
        // parent entry is still there, the unreadable contents degrade to nothing
        assert_eq!(selector.listing(), &["..".to_string()]);
    }

    #[test]
    fn activating_directory_descends() {
        let mut selector = FileSelector::open("/", fixture_fs()).unwrap();

        let activation = selector.activate_index(0).unwrap();
        assert_eq!(activation, Activation::Descended(PathBuf::from("/a")));
        assert!(activation.is_descend());

        assert_eq!(selector.current_directory(), Path::new("/a"));
        assert_eq!(selector.listing(), &["..".to_string(), "b".to_string(), "file2.txt".to_string()]);
        assert_eq!(selector.selection(), "a");
    }

    #[test]
    fn activating_file_is_terminal() {
        let mut selector = FileSelector::open("/a", fixture_fs()).unwrap();
        let listing_before: Vec<String> = selector.listing().to_vec();

        let activation = selector.activate_index(2).unwrap();
        assert_eq!(activation, Activation::File(PathBuf::from("/a/file2.txt")));
        assert!(!activation.is_descend());

        assert_eq!(selector.current_directory(), Path::new("/a"));
        assert_eq!(selector.listing(), &listing_before[..]);
        assert_eq!(selector.selection(), "file2.txt");
        assert_eq!(selector.selected_index(), Some(2));
    }

    #[test]
    fn activating_parent_entry_ascends() {
        let mut selector = FileSelector::open("/a/b", fixture_fs()).unwrap();

        let activation = selector.activate_index(0).unwrap();
        assert_eq!(activation, Activation::Descended(PathBuf::from("/a")));
        assert_eq!(selector.current_directory(), Path::new("/a"));
        assert_eq!(selector.listing(), &["..".to_string(), "b".to_string(), "file2.txt".to_string()]);
    }

    #[test]
    fn ascending_to_root_drops_parent_entry() {
        let mut selector = FileSelector::open("/a", fixture_fs()).unwrap();

        let activation = selector.activate_index(0).unwrap();
        assert_eq!(activation, Activation::Descended(PathBuf::from("/")));
        assert_eq!(selector.listing(), &["a".to_string(), "file3.txt".to_string()]);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut selector = FileSelector::open("/a", fixture_fs()).unwrap();
        let first: Vec<String> = selector.listing().to_vec();

        let current = selector.current_directory().to_path_buf();
        selector.rebuild(&current).unwrap();

        assert_eq!(selector.listing(), &first[..]);
        assert_eq!(selector.current_directory(), current.as_path());
    }

    #[test]
    fn activation_out_of_range_is_an_error() {
        let mut selector = FileSelector::open("/a", fixture_fs()).unwrap();
        let len = selector.listing().len();

        let result = selector.activate_index(99);
        assert_eq!(result, Err(SelectorError::IndexOutOfRange { index: 99, len }));

        // nothing was recorded
        assert_eq!(selector.selected_index(), None);
        assert_eq!(selector.selection(), "");
    }

    #[test]
    fn open_and_save_labels() {
        let fsf = fixture_fs();
        let opener = FileSelector::open("/", fsf.clone()).unwrap();
        let saver = FileSelector::save("/", fsf).unwrap();

        assert_eq!(opener.label(), "Open File");
        assert_eq!(saver.label(), "Save File");
        assert_eq!(saver.purpose(), SelectorPurpose::Save);
    }

    #[test]
    fn labels_are_overridable() {
        let labels = Labels {
            open_button: "Pick".to_string(),
            ..Labels::default()
        };
        let selector = FileSelector::open("/", fixture_fs()).unwrap().with_labels(labels);

        assert_eq!(selector.label(), "Pick File");
        assert_eq!(selector.labels().close_button, "Close");
    }

    #[test]
    fn choose_handler_receives_directory_and_selection() {
        let chosen: Rc<RefCell<Option<(PathBuf, String)>>> = Rc::new(RefCell::new(None));
        let chosen_clone = chosen.clone();

        let mut selector = FileSelector::open("/a", fixture_fs())
            .unwrap()
            .with_on_choose(Box::new(move |dir, file| {
                *chosen_clone.borrow_mut() = Some((dir.to_path_buf(), file.to_string()));
            }));

        selector.activate_index(2).unwrap();
        selector.choose_pressed();

        assert_eq!(
            chosen.borrow().clone(),
            Some((PathBuf::from("/a"), "file2.txt".to_string()))
        );
    }

    #[test]
    fn close_handler_fires() {
        let closed = Rc::new(RefCell::new(false));
        let closed_clone = closed.clone();

        let mut selector = FileSelector::open("/", fixture_fs())
            .unwrap()
            .with_on_close(Box::new(move || {
                *closed_clone.borrow_mut() = true;
            }));

        selector.close_pressed();
        assert_eq!(*closed.borrow(), true);
    }

    #[test]
    fn missing_handlers_are_a_valid_default() {
        let mut selector = FileSelector::open("/", fixture_fs()).unwrap();

        // nothing installed, nothing happens
        selector.choose_pressed();
        selector.close_pressed();

        assert_eq!(selector.current_directory(), Path::new("/"));
    }
}
