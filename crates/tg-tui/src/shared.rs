//! Shared view types: the styled output log the session writes into.

use ratatui::prelude::*;

use tg_shell::DisplaySink;

/// Visual style for an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// A command the user entered (yellow).
    Command,
    /// Normal output from the shell (white).
    Result,
    /// Error output (red).
    Error,
    /// Banner and front-end notices (cyan).
    System,
}

impl OutputStyle {
    /// Colour and modifier used to draw lines of this style.
    pub fn style(self) -> Style {
        match self {
            Self::Command => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Self::Result => Style::default().fg(Color::White),
            Self::Error => Style::default().fg(Color::Red),
            Self::System => Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        }
    }
}

/// A single line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// The text content.
    pub text: String,
}

/// The transcript shown in the output panel.
///
/// Scrolling is counted in lines up from the bottom, so new output always
/// snaps the view back to the latest line.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
    scroll: u16,
}

impl OutputLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Current scroll offset from the bottom.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll one line towards older output.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Scroll one line towards newer output.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Append text with an explicit style, one entry per line.
    pub fn push(&mut self, style: OutputStyle, text: &str) {
        for line in text.split('\n') {
            self.lines.push(OutputLine {
                style,
                text: line.to_string(),
            });
        }
        self.scroll = 0;
    }

    /// Lines ready for a `Paragraph`.
    pub fn to_lines(&self) -> Vec<Line<'_>> {
        self.lines
            .iter()
            .map(|ol| Line::from(Span::styled(ol.text.as_str(), ol.style.style())))
            .collect()
    }
}

impl DisplaySink for OutputLog {
    fn append(&mut self, line: &str) {
        self.push(OutputStyle::Result, line);
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    fn echo(&mut self, command: &str) {
        self.push(OutputStyle::Command, &format!("$ {command}"));
    }

    fn notice(&mut self, line: &str) {
        self.push(OutputStyle::System, line);
    }

    fn error(&mut self, line: &str) {
        self.push(OutputStyle::Error, line);
    }
}

/// Number of rows `lines` occupy when wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width);
    lines
        .iter()
        .map(|l| {
            if width == 0 {
                1
            } else {
                u16::try_from(l.width().max(1).div_ceil(width)).unwrap_or(u16::MAX)
            }
        })
        .fold(0u16, u16::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tg_shell::{SessionShell, ShellConfig};

    fn styles(log: &OutputLog) -> Vec<(OutputStyle, &str)> {
        log.lines()
            .iter()
            .map(|l| (l.style, l.text.as_str()))
            .collect()
    }

    #[test]
    fn session_lines_keep_their_kind() {
        let config = ShellConfig::default().without_decay();
        let mut shell = SessionShell::new(&config, OutputLog::new());
        shell.boot(Instant::now());
        shell.submit("ls");
        let _ = shell.import_state("{}");

        let log = shell.sink();
        assert_eq!(log.lines()[0].style, OutputStyle::System);
        assert_eq!(log.lines()[1].style, OutputStyle::System);
        assert_eq!(
            styles(log)[2..],
            [
                (OutputStyle::Command, "$ ls"),
                (OutputStyle::Result, "home  pet"),
                (
                    OutputStyle::Error,
                    r#"Failed to load filesystem: malformed filesystem document: missing root directory "/""#
                ),
            ]
        );
    }

    #[test]
    fn output_that_looks_like_a_command_stays_output() {
        let mut log = OutputLog::new();
        log.append("$ not a command");
        log.append("Failed to load filesystem");
        assert_eq!(
            styles(&log),
            [
                (OutputStyle::Result, "$ not a command"),
                (OutputStyle::Result, "Failed to load filesystem"),
            ]
        );

        let config = ShellConfig::default().without_decay();
        let mut shell = SessionShell::new(&config, OutputLog::new());
        shell.submit("echo $ hi");
        assert_eq!(
            styles(shell.sink()),
            [
                (OutputStyle::Command, "$ echo $ hi"),
                (OutputStyle::Result, "$ hi"),
            ]
        );
    }

    #[test]
    fn append_snaps_to_bottom() {
        let mut log = OutputLog::new();
        log.append("a");
        log.scroll_up();
        log.scroll_up();
        assert_eq!(log.scroll(), 2);

        log.append("b");
        assert_eq!(log.scroll(), 0);
    }

    #[test]
    fn scroll_down_stops_at_bottom() {
        let mut log = OutputLog::new();
        log.scroll_down();
        assert_eq!(log.scroll(), 0);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = OutputLog::new();
        log.push(OutputStyle::System, "one\ntwo");
        assert_eq!(log.lines().len(), 2);
        log.clear();
        assert!(log.lines().is_empty());
    }

    #[test]
    fn wrapped_height_counts_rows() {
        let lines = vec![Line::from("12345"), Line::from(""), Line::from("123")];
        assert_eq!(wrapped_height(&lines, 3), 2 + 1 + 1);
        assert_eq!(wrapped_height(&lines, 0), 3);
    }
}
