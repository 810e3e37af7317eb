pub mod check;
pub mod exec;
pub mod export;
pub mod repl;
pub mod tui;

use std::path::Path;

use tracing::debug;

use tg_shell::{DisplaySink, SessionShell};

/// Read a whole text file, with the path in the error.
fn read_text(path: &Path) -> Result<String, String> {
    debug!(path = %path.display(), "reading");
    std::fs::read_to_string(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "read failed");
        format!("cannot read {}: {e}", path.display())
    })
}

/// Load a filesystem document into a session. The session reports the
/// outcome to its own sink; the error is returned as well.
fn import_file<S: DisplaySink>(session: &mut SessionShell<S>, path: &Path) -> Result<(), String> {
    let text = read_text(path)?;
    session
        .import_state(&text)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Export the session's filesystem to a file.
fn export_file<S: DisplaySink>(session: &SessionShell<S>, path: &Path) -> Result<(), String> {
    let text = session.export_state().map_err(|e| e.to_string())?;
    debug!(path = %path.display(), bytes = text.len(), "writing");
    std::fs::write(path, text).map_err(|e| {
        debug!(path = %path.display(), error = %e, "write failed");
        format!("cannot write to {}: {e}", path.display())
    })
}
