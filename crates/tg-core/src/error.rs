/// Alias for `Result<T, FsError>`.
pub type FsResult<T> = Result<T, FsError>;

/// Errors that can occur when navigating or loading a filesystem.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// No entry with this name exists in the directory.
    #[error("not found: \"{0}\"")]
    NotFound(String),

    /// The entry exists but is a file, not a directory.
    #[error("not a directory: \"{0}\"")]
    NotADirectory(String),

    /// The entry exists but is a directory, not a file.
    #[error("not a file: \"{0}\"")]
    NotAFile(String),

    /// The document is not valid JSON or contains a value that is neither a
    /// string nor an object.
    #[error("malformed filesystem document: {0}")]
    Parse(#[source] serde_json::Error),

    /// The document parsed but has no `"/"` directory at the top level.
    #[error("malformed filesystem document: missing root directory \"/\"")]
    MissingRoot,

    /// A write could not proceed because a file sits where a directory is
    /// needed, or a directory sits where the file should go.
    #[error("path blocked: {0}")]
    PathBlocked(String),

    /// The tree could not be written out as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}
