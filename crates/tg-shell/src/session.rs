//! The session shell: state, output sink and decay timer in one place.
//!
//! Front ends own a [`SessionShell`] and feed it three kinds of events:
//! submitted lines, timer checks and import/export requests. Each event runs
//! to completion before the next one.

use std::time::Instant;

use tracing::{debug, info, warn};

use tg_core::VirtualFilesystem;

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::interpreter::{Outcome, process};
use crate::sink::DisplaySink;
use crate::state::ShellState;
use crate::timer::DecayTimer;

/// First banner line.
pub const BANNER: &str = concat!(
    "\u{1F41A} Termagotchi v",
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);
/// Second banner line.
pub const HINT: &str = "Type 'help' for a list of commands.";
/// Shown after a successful import.
pub const LOADED_MESSAGE: &str = "Filesystem loaded.";

/// Decay ticks beyond this many in one catch-up cannot change the pet, since
/// both counters have reached a bound by then.
const MAX_CATCH_UP_TICKS: u32 = 10;

/// A running shell session writing to a display sink.
#[derive(Debug)]
pub struct SessionShell<S: DisplaySink> {
    state: ShellState,
    sink: S,
    timer: DecayTimer,
}

impl<S: DisplaySink> SessionShell<S> {
    /// Create a session over the boot filesystem. Nothing is shown and the
    /// timer is idle until [`SessionShell::boot`].
    pub fn new(config: &ShellConfig, sink: S) -> Self {
        Self::with_filesystem(config, VirtualFilesystem::boot(), sink)
    }

    /// Create a session over a given filesystem.
    pub fn with_filesystem(config: &ShellConfig, fs: VirtualFilesystem, sink: S) -> Self {
        let timer = DecayTimer::new(config.decay_period.unwrap_or_default());
        Self {
            state: ShellState::with_filesystem(config, fs),
            sink,
            timer,
        }
    }

    /// Render the status file, print the banner and start passive decay.
    pub fn boot(&mut self, now: Instant) {
        self.state.refresh_status();
        self.sink.notice(BANNER);
        self.sink.notice(HINT);
        self.timer.start(now);
        info!(
            pet = %self.state.pet_name(),
            decay = self.timer.is_active(),
            "session booted"
        );
    }

    /// Run one input line. Blank lines are ignored entirely.
    pub fn submit(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.sink.echo(line);

        match process(&mut self.state, line) {
            Outcome::Print(text) => {
                for out in text.split('\n') {
                    self.sink.append(out);
                }
            }
            Outcome::Clear => self.sink.clear(),
            Outcome::Nothing => {}
        }
    }

    /// Apply any decay ticks that have come due by `now`. Returns how many
    /// the timer reported.
    pub fn tick(&mut self, now: Instant) -> u32 {
        let fired = self.timer.poll(now);
        if fired > 0 {
            debug!(ticks = fired, "decay");
            for _ in 0..fired.min(MAX_CATCH_UP_TICKS) {
                self.state.decay();
            }
        }
        fired
    }

    /// Serialize the filesystem.
    pub fn export_state(&self) -> ShellResult<String> {
        let text = self.state.fs().serialize().map_err(ShellError::Export)?;
        info!(bytes = text.len(), "filesystem exported");
        Ok(text)
    }

    /// Replace the filesystem with a parsed document.
    ///
    /// On failure the message is shown, the current filesystem and working
    /// directory stay as they were, and the error is returned.
    pub fn import_state(&mut self, text: &str) -> ShellResult<()> {
        match VirtualFilesystem::deserialize(text) {
            Ok(fs) => {
                info!(
                    files = fs.file_count(),
                    directories = fs.directory_count(),
                    "filesystem imported"
                );
                self.state.replace_filesystem(fs);
                self.sink.notice(LOADED_MESSAGE);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "import rejected");
                self.sink.error(&format!("Failed to load filesystem: {e}"));
                Err(ShellError::Import(e))
            }
        }
    }

    /// Stop passive decay for good.
    pub fn shutdown(&mut self) {
        self.timer.cancel();
        debug!("session shut down");
    }

    /// The session state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// The decay timer.
    pub fn timer(&self) -> &DecayTimer {
        &self.timer
    }

    /// The display sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The display sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the session and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
