use tracing::trace;

use crate::config::{HOME_DIR, NOTES_CONTENT, README_CONTENT};
use crate::core::error::FsError;
use crate::models::{DirEntry, FsNode};

/// In-memory filesystem for a single shell session.
///
/// Owns the whole tree and the current working directory.
///
/// # Path Convention
///
/// - All resolved paths are absolute: `"/"`, `"/home/dev"`
/// - No trailing slashes except for the root itself
/// - `cwd` always names an existing directory; only [`change_dir`]
///   moves it
///
/// [`change_dir`]: VirtualFileSystem::change_dir
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFileSystem {
    /// Root directory node (`/`)
    root: FsNode,
    /// Absolute path of the working directory
    cwd: String,
}

impl VirtualFileSystem {
    /// Create the fixed initial tree with cwd at the home directory.
    ///
    /// ```text
    /// /home/dev/readme.txt
    /// /home/dev/notes.md
    /// /home/dev/projects/web-terminal/
    /// ```
    pub fn new() -> Self {
        let dev = FsNode::dir([
            ("readme.txt", FsNode::file(README_CONTENT)),
            ("notes.md", FsNode::file(NOTES_CONTENT)),
            (
                "projects",
                FsNode::dir([("web-terminal", FsNode::empty_dir())]),
            ),
        ]);
        let root = FsNode::dir([("home", FsNode::dir([("dev", dev)]))]);

        Self {
            root,
            cwd: HOME_DIR.to_string(),
        }
    }

    /// Create a filesystem from an arbitrary tree.
    ///
    /// Fails when `root` is not a directory or `cwd` does not name an
    /// existing directory. A relative `cwd` is taken from `/`.
    pub fn from_root(root: FsNode, cwd: &str) -> Result<Self, FsError> {
        if !root.is_dir() {
            return Err(FsError::NotADirectory("/".to_string()));
        }

        let mut fs = Self {
            root,
            cwd: "/".to_string(),
        };
        fs.change_dir(cwd)?;
        Ok(fs)
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Resolve a possibly-relative path to a normalized absolute path.
    ///
    /// - `None`, `""` and `"."` resolve to the cwd
    /// - A path not starting with `/` is joined onto the cwd
    /// - `..` never climbs above `/`
    ///
    /// Pure: the result does not depend on which nodes exist.
    pub fn resolve_path(&self, path: Option<&str>) -> String {
        match path {
            None | Some("") | Some(".") => self.cwd.clone(),
            Some(p) if p.starts_with('/') => Self::normalize_path(p),
            Some(p) => Self::normalize_path(&format!("{}/{}", self.cwd, p)),
        }
    }

    /// Normalize a path by resolving `.` and `..` components.
    ///
    /// Returns an absolute path; the empty result is `/`.
    pub fn normalize_path(path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            }
        }

        format!("/{}", parts.join("/"))
    }

    /// Get a node and its normalized absolute path.
    ///
    /// Fails with [`FsError::NotFound`] when any segment is missing or an
    /// intermediate segment is a file.
    pub fn get_node(&self, path: Option<&str>) -> Result<(&FsNode, String), FsError> {
        let full = self.resolve_path(path);
        let mut current = &self.root;

        for part in full.split('/').filter(|s| !s.is_empty()) {
            current = current
                .child(part)
                .ok_or_else(|| FsError::NotFound(full.clone()))?;
        }

        trace!(path = ?path, resolved = %full, "resolved node");
        Ok((current, full))
    }

    /// Read a file's content.
    pub fn read_file(&self, path: Option<&str>) -> Result<&str, FsError> {
        match self.get_node(path)? {
            (FsNode::File { content }, _) => Ok(content),
            (FsNode::Dir { .. }, full) => Err(FsError::NotAFile(full)),
        }
    }

    /// List directory contents in name order.
    pub fn list_dir(&self, path: Option<&str>) -> Result<Vec<DirEntry>, FsError> {
        match self.get_node(path)? {
            (FsNode::Dir { children }, _) => Ok(children
                .iter()
                .map(|(name, node)| DirEntry {
                    name: name.clone(),
                    kind: node.kind(),
                    size: node.size(),
                })
                .collect()),
            (FsNode::File { .. }, full) => Err(FsError::NotADirectory(full)),
        }
    }

    /// Move the working directory.
    ///
    /// The cwd is left untouched unless `path` resolves to a directory.
    /// Returns the new cwd.
    pub fn change_dir(&mut self, path: &str) -> Result<&str, FsError> {
        let full = match self.get_node(Some(path))? {
            (FsNode::Dir { .. }, full) => full,
            (FsNode::File { .. }, full) => return Err(FsError::NotADirectory(full)),
        };

        self.cwd = full;
        Ok(&self.cwd)
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}
