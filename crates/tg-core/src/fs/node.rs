use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FsError, FsResult};

/// A single entry in the tree: a text file or a directory.
///
/// In the JSON document a file is a string and a directory is an object, so
/// the enum is untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A file holding opaque text.
    File(String),
    /// A directory owning its children.
    Directory(Directory),
}

impl Node {
    /// Create an empty directory node.
    pub fn dir() -> Self {
        Self::Directory(Directory::new())
    }

    /// Create a file node.
    pub fn file(contents: impl Into<String>) -> Self {
        Self::File(contents.into())
    }

    /// Whether this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether this node is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// The file contents, if this is a file.
    pub fn as_file(&self) -> Option<&str> {
        match self {
            Self::File(text) => Some(text),
            Self::Directory(_) => None,
        }
    }

    /// The directory, if this is a directory.
    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }

    /// The directory, mutably, if this is a directory.
    pub fn as_dir_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }
}

/// A directory: child names mapped to exclusively owned nodes.
///
/// Children are kept in a `BTreeMap`, so listings come out sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    pub(crate) entries: BTreeMap<String, Node>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a child, returning the previous node with that name.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        self.entries.insert(name.into(), node)
    }

    /// Builder-style [`Directory::insert`].
    pub fn with(mut self, name: impl Into<String>, node: Node) -> Self {
        self.insert(name, node);
        self
    }

    /// Look up a child by name.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }

    /// Child names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Children in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The child directory called `name`.
    pub fn subdir(&self, name: &str) -> FsResult<&Directory> {
        match self.get(name) {
            Some(Node::Directory(dir)) => Ok(dir),
            Some(Node::File(_)) => Err(FsError::NotADirectory(name.to_string())),
            None => Err(FsError::NotFound(name.to_string())),
        }
    }

    /// The contents of the child file called `name`.
    pub fn file(&self, name: &str) -> FsResult<&str> {
        match self.get(name) {
            Some(Node::File(text)) => Ok(text),
            Some(Node::Directory(_)) => Err(FsError::NotAFile(name.to_string())),
            None => Err(FsError::NotFound(name.to_string())),
        }
    }
}

impl From<BTreeMap<String, Node>> for Directory {
    fn from(entries: BTreeMap<String, Node>) -> Self {
        Self { entries }
    }
}
