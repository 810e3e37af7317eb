use std::fmt;

/// The first segment of every working directory.
pub const ROOT_SEGMENT: &str = "/";

/// Path segments from the root to the current directory, e.g. `["/", "home"]`.
///
/// Segments are only pushed by [`crate::VirtualFilesystem::descend`] after the
/// target directory has been found, and the root segment can never be popped,
/// so a working directory always names an existing directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory {
    segments: Vec<String>,
}

impl Default for WorkingDirectory {
    fn default() -> Self {
        Self::root()
    }
}

impl WorkingDirectory {
    /// The root directory.
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_SEGMENT.to_string()],
        }
    }

    /// All segments, starting with the root segment.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments below the root.
    pub fn below_root(&self) -> &[String] {
        &self.segments[1..]
    }

    /// Number of segments, 1 at the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root directory.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Move to the parent directory. Does nothing at the root.
    ///
    /// Returns `true` if a segment was removed.
    pub fn ascend(&mut self) -> bool {
        if self.segments.len() > 1 {
            self.segments.pop();
            true
        } else {
            false
        }
    }

    /// Go back to the root.
    pub fn reset(&mut self) {
        self.segments.truncate(1);
    }

    pub(crate) fn push(&mut self, name: &str) {
        self.segments.push(name.to_string());
    }
}

impl fmt::Display for WorkingDirectory {
    /// Segments joined by `/`, with the doubled slash after the root collapsed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/").replacen("//", "/", 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_as_slash() {
        assert_eq!(WorkingDirectory::root().to_string(), "/");
    }

    #[test]
    fn nested_display() {
        let mut wd = WorkingDirectory::root();
        wd.push("home");
        assert_eq!(wd.to_string(), "/home");
        wd.push("docs");
        assert_eq!(wd.to_string(), "/home/docs");
    }

    #[test]
    fn ascend_at_root_is_noop() {
        let mut wd = WorkingDirectory::root();
        assert!(!wd.ascend());
        assert_eq!(wd, WorkingDirectory::root());
    }

    #[test]
    fn ascend_pops_one_segment() {
        let mut wd = WorkingDirectory::root();
        wd.push("home");
        wd.push("docs");
        assert!(wd.ascend());
        assert_eq!(wd.to_string(), "/home");
        assert_eq!(wd.depth(), 2);
    }

    #[test]
    fn reset_returns_to_root() {
        let mut wd = WorkingDirectory::root();
        wd.push("home");
        wd.reset();
        assert!(wd.is_root());
        assert!(wd.below_root().is_empty());
    }
}
