//! Command dispatch.
//!
//! Every non-blank command costs the pet one point of hunger before it runs,
//! whether or not the command is recognized. Handlers never fail: bad names
//! and unknown commands become ordinary output text.

use tracing::debug;

use crate::parser::{COMMAND_NAMES, Command, parse_command};
use crate::state::ShellState;

/// Hunger added by every command.
pub const COMMAND_HUNGER_TAX: i32 = 1;
/// Hunger removed by `feed`.
pub const FEED_AMOUNT: i32 = 3;
/// Happiness added by `play`.
pub const PLAY_AMOUNT: i32 = 3;
/// Happiness added by `echo`.
pub const ECHO_AMOUNT: i32 = 1;

/// Printed when `cd` cannot enter its target.
pub const NO_SUCH_DIRECTORY: &str = "No such directory";
/// Printed when `cat` cannot read its target.
pub const NO_SUCH_FILE: &str = "No such file";

/// What the display should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Append this text; it may span several lines.
    Print(String),
    /// Wipe the display.
    Clear,
    /// Nothing to show.
    Nothing,
}

/// Parse and run one input line. Blank lines do nothing and cost nothing.
pub fn process(state: &mut ShellState, input: &str) -> Outcome {
    match parse_command(input) {
        Some(command) => execute(state, command),
        None => Outcome::Nothing,
    }
}

/// Run a parsed command.
pub fn execute(state: &mut ShellState, command: Command) -> Outcome {
    debug!(command = command.name(), "dispatch");

    state.pet.adjust(COMMAND_HUNGER_TAX, 0);
    state.refresh_status();

    match command {
        Command::List => do_ls(state),
        Command::ChangeDir { target } => do_cd(state, target.as_deref()),
        Command::PrintWorkingDir => Outcome::Print(state.cwd.to_string()),
        Command::Cat { name } => do_cat(state, name.as_deref()),
        Command::Echo { args } => do_echo(state, &args),
        Command::Feed => do_feed(state),
        Command::Play => do_play(state),
        Command::Help => Outcome::Print(help_text()),
        Command::Clear => Outcome::Clear,
        Command::Unknown { name } => Outcome::Print(format!("{name}: command not found")),
    }
}

/// The `help` output.
pub fn help_text() -> String {
    format!("Commands: {}", COMMAND_NAMES.join(", "))
}

fn do_ls(state: &ShellState) -> Outcome {
    let names = state.fs.list(&state.cwd);
    if names.is_empty() {
        Outcome::Nothing
    } else {
        Outcome::Print(names.join("  "))
    }
}

fn do_cd(state: &mut ShellState, target: Option<&str>) -> Outcome {
    match target {
        Some("..") => {
            state.cwd.ascend();
            Outcome::Nothing
        }
        Some(name) => match state.fs.descend(&mut state.cwd, name) {
            Ok(()) => Outcome::Nothing,
            Err(e) => {
                debug!(error = %e, "cd failed");
                Outcome::Print(NO_SUCH_DIRECTORY.to_string())
            }
        },
        None => Outcome::Print(NO_SUCH_DIRECTORY.to_string()),
    }
}

fn do_cat(state: &ShellState, name: Option<&str>) -> Outcome {
    let Some(name) = name else {
        return Outcome::Print(NO_SUCH_FILE.to_string());
    };
    match state.fs.read_file(&state.cwd, name) {
        Ok(text) => Outcome::Print(text.to_string()),
        Err(e) => {
            debug!(error = %e, "cat failed");
            Outcome::Print(NO_SUCH_FILE.to_string())
        }
    }
}

fn do_echo(state: &mut ShellState, args: &[String]) -> Outcome {
    let text = args.join(" ");
    state.pet.adjust(0, ECHO_AMOUNT);
    state.refresh_status();
    Outcome::Print(text)
}

fn do_feed(state: &mut ShellState) -> Outcome {
    state.pet.adjust(-FEED_AMOUNT, 0);
    state.refresh_status();
    Outcome::Print(format!("You fed your {}.", state.pet_name()))
}

fn do_play(state: &mut ShellState) -> Outcome {
    state.pet.adjust(0, PLAY_AMOUNT);
    state.refresh_status();
    Outcome::Print(format!("You played with your {}!", state.pet_name()))
}
