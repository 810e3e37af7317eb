//! Command parsing for shell input.

/// Names of all built-in commands, in help order.
pub const COMMAND_NAMES: &[&str] = &[
    "ls", "cd", "pwd", "cat", "echo", "feed", "play", "help", "clear",
];

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the current directory.
    List,
    /// Change directory; `..` goes up one level.
    ChangeDir {
        /// Target directory name, if one was given.
        target: Option<String>,
    },
    /// Print the working directory.
    PrintWorkingDir,
    /// Print a file in the current directory.
    Cat {
        /// File name, if one was given.
        name: Option<String>,
    },
    /// Print the arguments back.
    Echo {
        /// Whitespace-separated arguments.
        args: Vec<String>,
    },
    /// Feed the pet.
    Feed,
    /// Play with the pet.
    Play,
    /// Show the command list.
    Help,
    /// Clear the display.
    Clear,
    /// Anything else.
    Unknown {
        /// The unrecognized command token.
        name: String,
    },
}

impl Command {
    /// The command token this was parsed from.
    pub fn name(&self) -> &str {
        match self {
            Self::List => "ls",
            Self::ChangeDir { .. } => "cd",
            Self::PrintWorkingDir => "pwd",
            Self::Cat { .. } => "cat",
            Self::Echo { .. } => "echo",
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Unknown { name } => name,
        }
    }
}

/// Parse one input line. Blank input yields `None`.
///
/// The first whitespace-separated token selects the command (case-sensitive);
/// the rest are arguments. There is no quoting. Arguments a command does not
/// use are ignored.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut words = input.split_whitespace();
    let verb = words.next()?;
    let mut rest = words.map(str::to_string);

    let command = match verb {
        "ls" => Command::List,
        "cd" => Command::ChangeDir {
            target: rest.next(),
        },
        "pwd" => Command::PrintWorkingDir,
        "cat" => Command::Cat { name: rest.next() },
        "echo" => Command::Echo {
            args: rest.collect(),
        },
        "feed" => Command::Feed,
        "play" => Command::Play,
        "help" => Command::Help,
        "clear" => Command::Clear,
        other => Command::Unknown {
            name: other.to_string(),
        },
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t "), None);
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("ls"), Some(Command::List));
        assert_eq!(parse_command("pwd"), Some(Command::PrintWorkingDir));
        assert_eq!(parse_command("feed"), Some(Command::Feed));
        assert_eq!(parse_command("play"), Some(Command::Play));
        assert_eq!(parse_command("help"), Some(Command::Help));
        assert_eq!(parse_command("clear"), Some(Command::Clear));
    }

    #[test]
    fn parse_cd() {
        assert_eq!(
            parse_command("cd home"),
            Some(Command::ChangeDir {
                target: Some("home".to_string())
            })
        );
        assert_eq!(
            parse_command("cd"),
            Some(Command::ChangeDir { target: None })
        );
        assert_eq!(
            parse_command("  cd   ..  "),
            Some(Command::ChangeDir {
                target: Some("..".to_string())
            })
        );
    }

    #[test]
    fn parse_cat_takes_first_argument() {
        assert_eq!(
            parse_command("cat readme.txt other.txt"),
            Some(Command::Cat {
                name: Some("readme.txt".to_string())
            })
        );
    }

    #[test]
    fn parse_echo_splits_on_whitespace() {
        assert_eq!(
            parse_command("echo hello   big\tworld"),
            Some(Command::Echo {
                args: vec!["hello".into(), "big".into(), "world".into()]
            })
        );
        assert_eq!(parse_command("echo"), Some(Command::Echo { args: vec![] }));
    }

    #[test]
    fn no_quoting() {
        assert_eq!(
            parse_command("echo \"a b\""),
            Some(Command::Echo {
                args: vec!["\"a".into(), "b\"".into()]
            })
        );
    }

    #[test]
    fn commands_are_case_sensitive() {
        assert_eq!(
            parse_command("LS"),
            Some(Command::Unknown {
                name: "LS".to_string()
            })
        );
    }

    #[test]
    fn unknown_keeps_only_the_token() {
        let cmd = parse_command("dance wildly").unwrap();
        assert_eq!(
            cmd,
            Command::Unknown {
                name: "dance".to_string()
            }
        );
        assert_eq!(cmd.name(), "dance");
    }

    #[test]
    fn names_match_tokens() {
        for name in COMMAND_NAMES {
            assert_eq!(parse_command(name).unwrap().name(), *name);
        }
    }
}
