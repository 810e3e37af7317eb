//! Command interpreter and session shell for Termagotchi.
//!
//! A [`SessionShell`] owns the filesystem, working directory and pet for one
//! session. Submitted lines are parsed into a [`Command`], run by the
//! [`interpreter`] against the session's [`ShellState`], and the resulting
//! text is forwarded to a [`DisplaySink`]. A [`DecayTimer`] owned by the
//! session drives passive pet decay independently of the interpreter.

/// Session configuration.
pub mod config;
/// Error types for the session shell.
pub mod error;
/// Command dispatch and handlers.
pub mod interpreter;
/// Parsing input lines into commands.
pub mod parser;
/// The session object tying state, output and timer together.
pub mod session;
/// Output sinks.
pub mod sink;
/// The filesystem, working directory and pet of a session.
pub mod state;
/// Cancellable passive-decay schedule.
pub mod timer;

pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use interpreter::Outcome;
pub use parser::{Command, parse_command};
pub use session::SessionShell;
pub use sink::{BufferSink, DisplaySink};
pub use state::ShellState;
pub use timer::DecayTimer;
