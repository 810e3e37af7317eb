//! Display sinks: where session output goes.

/// Something that can show shell output line by line.
///
/// The session says what kind of line it is sending, so a sink never has to
/// guess from the text. Only [`append`](DisplaySink::append) and
/// [`clear`](DisplaySink::clear) are required; the other kinds fall back to
/// plain lines.
pub trait DisplaySink {
    /// Append one line of command output.
    fn append(&mut self, line: &str);

    /// Remove everything shown so far.
    fn clear(&mut self);

    /// Show a submitted command line.
    fn echo(&mut self, command: &str) {
        self.append(&format!("$ {command}"));
    }

    /// Show a session notice such as the banner.
    fn notice(&mut self, line: &str) {
        self.append(line);
    }

    /// Show an error reported by the session.
    fn error(&mut self, line: &str) {
        self.append(line);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn append(&mut self, line: &str) {
        (**self).append(line);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn echo(&mut self, command: &str) {
        (**self).echo(command);
    }

    fn notice(&mut self, line: &str) {
        (**self).notice(line);
    }

    fn error(&mut self, line: &str) {
        (**self).error(line);
    }
}

/// An in-memory sink that keeps every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines currently held.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined by newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Take the held lines, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl DisplaySink for BufferSink {
    fn append(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}
