use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot resolve {path:?} to an absolute form: {details}")]
pub struct PathResolutionError {
    pub path: PathBuf,
    pub details: String,
}

/*
Turns any path into an absolute, lexically normalized one: "." components are
dropped, ".." collapses into the preceding component and saturates at the root
("/.." is "/"). Relative input is resolved against the process working
directory, which is the only way this can fail.

Purely lexical, no filesystem access - so it behaves identically over a mock.
 */
pub fn normalize(path: &Path) -> Result<PathBuf, PathResolutionError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                return Err(PathResolutionError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                });
            }
        }
    };

    let mut result = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop is a no-op once only the root remains
                result.pop();
            }
            Component::Normal(name) => result.push(name),
        }
    }

    Ok(result)
}
