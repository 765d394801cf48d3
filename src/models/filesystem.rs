use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// A node of the in-memory filesystem tree.
///
/// Children are keyed by name, so names are unique within a directory and
/// listings come out in name order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsNode {
    /// Regular file with text content
    File { content: String },
    /// Directory with named children
    Dir { children: BTreeMap<String, FsNode> },
}

impl FsNode {
    /// Create a file node.
    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    /// Create a directory node from `(name, node)` pairs.
    pub fn dir<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, FsNode)>,
        S: Into<String>,
    {
        Self::Dir {
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    /// Create an empty directory node.
    pub fn empty_dir() -> Self {
        Self::Dir {
            children: BTreeMap::new(),
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir { .. })
    }

    /// Node kind without its payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File { .. } => NodeKind::File,
            Self::Dir { .. } => NodeKind::Dir,
        }
    }

    /// Displayed size: content length in characters, 0 for directories.
    pub fn size(&self) -> usize {
        match self {
            Self::File { content } => content.chars().count(),
            Self::Dir { .. } => 0,
        }
    }

    /// Look up a direct child by name. Files have no children.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        match self {
            Self::Dir { children } => children.get(name),
            Self::File { .. } => None,
        }
    }
}

/// Kind of a filesystem node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Dir,
}

impl NodeKind {
    /// Type character used by `ls -l`.
    pub fn type_char(self) -> char {
        match self {
            Self::File => '-',
            Self::Dir => 'd',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory entry returned by `list_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
    pub size: usize,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }
}
