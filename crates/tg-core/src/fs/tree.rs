use std::collections::BTreeMap;

use tracing::warn;

use super::node::{Directory, Node};
use super::workdir::{ROOT_SEGMENT, WorkingDirectory};
use crate::error::{FsError, FsResult};

/// Where the pet status renderer writes.
pub const STATUS_PATH: &str = "/pet/status.txt";

/// Contents of `/home/readme.txt` in a freshly booted filesystem.
pub const README_TEXT: &str =
    "Welcome to Termagotchi!\nTry commands: ls, cd, cat, feed, play, help.";

/// The in-memory filesystem: a root directory owning the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFilesystem {
    root: Directory,
}

impl VirtualFilesystem {
    /// An empty filesystem with only the root directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing directory as the root.
    pub fn from_root(root: Directory) -> Self {
        Self { root }
    }

    /// The layout a new session starts with: a readme under `/home` and an
    /// empty status file under `/pet`.
    pub fn boot() -> Self {
        let root = Directory::new()
            .with(
                "home",
                Node::Directory(Directory::new().with("readme.txt", Node::file(README_TEXT))),
            )
            .with(
                "pet",
                Node::Directory(Directory::new().with("status.txt", Node::file(""))),
            );
        Self { root }
    }

    /// The root directory.
    pub fn root(&self) -> &Directory {
        &self.root
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// The directory a working directory points at.
    ///
    /// A working directory only ever names existing directories, so this
    /// always finds its target. Should the tree have changed underneath it,
    /// the root is returned instead.
    pub fn resolve(&self, wd: &WorkingDirectory) -> &Directory {
        match self.lookup_dir(wd.below_root()) {
            Some(dir) => dir,
            None => {
                warn!(cwd = %wd, "working directory no longer resolves, using root");
                &self.root
            }
        }
    }

    /// Child names of the current directory, in listing order.
    pub fn list(&self, wd: &WorkingDirectory) -> Vec<&str> {
        self.resolve(wd).names().collect()
    }

    /// Enter the child directory `name` of the current directory.
    ///
    /// The working directory is only changed on success.
    pub fn descend(&self, wd: &mut WorkingDirectory, name: &str) -> FsResult<()> {
        self.resolve(wd).subdir(name)?;
        wd.push(name);
        Ok(())
    }

    /// Contents of the file `name` in the current directory.
    pub fn read_file(&self, wd: &WorkingDirectory, name: &str) -> FsResult<&str> {
        self.resolve(wd).file(name)
    }

    /// Look up a node by absolute path. `/` is the root directory itself and
    /// yields `None` since the root is not a child node.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let parts = split_path(path);
        let (leaf, parents) = parts.split_last()?;
        let dir = parents
            .iter()
            .try_fold(&self.root, |dir, part| dir.get(part)?.as_dir())?;
        dir.get(leaf)
    }

    fn lookup_dir(&self, segments: &[String]) -> Option<&Directory> {
        segments
            .iter()
            .try_fold(&self.root, |dir, seg| dir.get(seg)?.as_dir())
    }

    // -----------------------------------------------------------------------
    // Writing
    // -----------------------------------------------------------------------

    /// Write a file at an absolute path, creating missing directories on the
    /// way. Existing nodes are never replaced by a different kind: a file in
    /// place of an ancestor, or a directory in place of the leaf, fails with
    /// [`FsError::PathBlocked`] and leaves the tree unchanged.
    pub fn write_file(&mut self, path: &str, contents: impl Into<String>) -> FsResult<()> {
        let parts = split_path(path);
        let Some((leaf, parents)) = parts.split_last() else {
            return Err(FsError::PathBlocked(path.to_string()));
        };

        let mut dir = &mut self.root;
        for part in parents {
            let node = dir
                .entries
                .entry((*part).to_string())
                .or_insert_with(Node::dir);
            dir = match node {
                Node::Directory(child) => child,
                Node::File(_) => return Err(FsError::PathBlocked(path.to_string())),
            };
        }

        match dir.entries.get_mut(*leaf) {
            Some(Node::File(text)) => *text = contents.into(),
            Some(Node::Directory(_)) => return Err(FsError::PathBlocked(path.to_string())),
            None => {
                dir.entries
                    .insert((*leaf).to_string(), Node::File(contents.into()));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Every node below the root with its absolute path, depth first, in
    /// listing order.
    pub fn walk(&self) -> Vec<(String, &Node)> {
        let mut out = Vec::new();
        walk_dir(&self.root, "", &mut out);
        out
    }

    /// Number of directories below the root.
    pub fn directory_count(&self) -> usize {
        self.walk().iter().filter(|(_, node)| node.is_dir()).count()
    }

    /// Number of files in the whole tree.
    pub fn file_count(&self) -> usize {
        self.walk().iter().filter(|(_, node)| node.is_file()).count()
    }

    // -----------------------------------------------------------------------
    // Document format
    // -----------------------------------------------------------------------

    /// Write the tree as a pretty-printed JSON document of the form
    /// `{"/": {...}}`, with directories as objects and files as strings.
    pub fn serialize(&self) -> FsResult<String> {
        let doc = BTreeMap::from([(ROOT_SEGMENT, &self.root)]);
        serde_json::to_string_pretty(&doc).map_err(FsError::Serialize)
    }

    /// Parse a document written by [`VirtualFilesystem::serialize`].
    ///
    /// Only the structure is checked: every value must be a string or an
    /// object, and the top level must hold a `"/"` directory. Other top-level
    /// keys are ignored.
    pub fn deserialize(text: &str) -> FsResult<Self> {
        let mut doc: BTreeMap<String, Node> = serde_json::from_str(text).map_err(FsError::Parse)?;
        match doc.remove(ROOT_SEGMENT) {
            Some(Node::Directory(root)) => Ok(Self { root }),
            _ => Err(FsError::MissingRoot),
        }
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

fn walk_dir<'a>(dir: &'a Directory, prefix: &str, out: &mut Vec<(String, &'a Node)>) {
    for (name, node) in dir.iter() {
        let path = format!("{prefix}/{name}");
        out.push((path.clone(), node));
        if let Node::Directory(child) = node {
            walk_dir(child, &path, out);
        }
    }
}
