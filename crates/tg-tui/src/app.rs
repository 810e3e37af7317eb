//! Top-level application state: the session plus the input line.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use tg_shell::{SessionShell, ShellConfig};

use crate::shared::{OutputLog, OutputStyle};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The running shell session, writing into the output log.
    pub session: SessionShell<OutputLog>,
    /// Current input text.
    pub input_text: String,
    /// Cursor position within input text, in bytes.
    pub input_cursor: usize,
    /// File used by the export and import shortcuts.
    pub save_path: PathBuf,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create a new app. Call [`TuiApp::boot`] before the first draw.
    pub fn new(config: &ShellConfig, save_path: PathBuf) -> Self {
        Self {
            session: SessionShell::new(config, OutputLog::new()),
            input_text: String::new(),
            input_cursor: 0,
            save_path,
            should_quit: false,
        }
    }

    /// Print the banner and start passive decay.
    pub fn boot(&mut self, now: Instant) {
        self.session.boot(now);
    }

    /// The output log.
    pub fn log(&self) -> &OutputLog {
        self.session.sink()
    }

    /// Apply due decay ticks.
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('s') => self.export_to_save_path(),
                KeyCode::Char('o') => {
                    let path = self.save_path.clone();
                    self.import_from(&path);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                self.input_text.clear();
                self.input_cursor = 0;
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input_text.remove(prev);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Left => self.input_cursor = self.prev_boundary(),
            KeyCode::Right => {
                if self.input_cursor < self.input_text.len() {
                    let next = self.input_text[self.input_cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.input_cursor + i)
                        .unwrap_or(self.input_text.len());
                    self.input_cursor = next;
                }
            }
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Up => self.session.sink_mut().scroll_up(),
            KeyCode::Down => self.session.sink_mut().scroll_down(),
            KeyCode::Char(c) => {
                self.input_text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> usize {
        self.input_text[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_text);
        self.input_cursor = 0;
        self.session.submit(&input);
    }

    /// Write the filesystem to the save path and report the result.
    pub fn export_to_save_path(&mut self) {
        let result = self
            .session
            .export_state()
            .map_err(|e| e.to_string())
            .and_then(|text| std::fs::write(&self.save_path, text).map_err(|e| e.to_string()));

        let path = self.save_path.display().to_string();
        match result {
            Ok(()) => {
                info!(path = %path, "saved");
                self.notice(OutputStyle::System, &format!("Saved to {path}"));
            }
            Err(e) => {
                warn!(path = %path, error = %e, "save failed");
                self.notice(OutputStyle::Error, &format!("Cannot save to {path}: {e}"));
            }
        }
    }

    /// Load a filesystem document from `path`.
    ///
    /// The session reports parse failures itself. A file that cannot be read
    /// is reported here; either way the current filesystem stays.
    pub fn import_from(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                // Outcome already shown by the session.
                let _ = self.session.import_state(&text);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read import file");
                self.notice(
                    OutputStyle::Error,
                    &format!("Cannot read {}: {e}", path.display()),
                );
            }
        }
    }

    fn notice(&mut self, style: OutputStyle, text: &str) {
        self.session.sink_mut().push(style, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> TuiApp {
        let mut app = TuiApp::new(
            &ShellConfig::default().without_decay(),
            dir.path().join("fs.json"),
        );
        app.boot(Instant::now());
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_line(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn last_text(app: &TuiApp) -> String {
        app.log().lines().last().map(|l| l.text.clone()).unwrap_or_default()
    }

    #[test]
    fn boot_shows_banner() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);
        assert_eq!(app.log().lines().len(), 2);
        assert_eq!(app.log().lines()[0].style, OutputStyle::System);
    }

    #[test]
    fn enter_submits_and_clears_input() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        type_line(&mut app, "echo hi");
        assert!(app.input_text.is_empty());
        assert_eq!(app.input_cursor, 0);
        assert_eq!(last_text(&app), "hi");
        assert_eq!(app.session.state().pet().happiness, 6);
    }

    #[test]
    fn editing_keys() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        for c in "lsx".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_text, "ls");
        app.handle_key(key(KeyCode::Home));
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.input_text, "pls");
        app.handle_key(key(KeyCode::Esc));
        assert!(app.input_text.is_empty());
    }

    #[test]
    fn ctrl_c_quits() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        type_line(&mut app, "play");
        app.handle_key(ctrl('s'));
        assert!(last_text(&app).starts_with("Saved to "));
        assert!(dir.path().join("fs.json").exists());

        type_line(&mut app, "cd home");
        app.handle_key(ctrl('o'));
        assert_eq!(last_text(&app), "Filesystem loaded.");
        assert!(app.session.state().cwd().is_root());
    }

    #[test]
    fn load_missing_file_reports_error() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(ctrl('o'));
        let last = app.log().lines().last().unwrap();
        assert_eq!(last.style, OutputStyle::Error);
        assert!(last.text.starts_with("Cannot read "));
    }

    #[test]
    fn load_malformed_file_keeps_filesystem() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fs.json"), "[1, 2").unwrap();
        let mut app = app(&dir);
        let before = app.session.state().fs().clone();
        app.handle_key(ctrl('o'));
        assert_eq!(app.session.state().fs(), &before);
        assert!(last_text(&app).starts_with("Failed to load filesystem: "));
    }

    #[test]
    fn shell_stays_usable_after_failed_import() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fs.json"), r#"{"home": {}}"#).unwrap();
        let mut app = app(&dir);
        app.import_from(&dir.path().join("fs.json"));
        app.import_from(&dir.path().join("absent.json"));
        assert!(!app.should_quit);

        type_line(&mut app, "ls");
        assert_eq!(last_text(&app), "home  pet");
    }

    #[test]
    fn clear_command_empties_log() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        type_line(&mut app, "clear");
        assert!(app.log().lines().is_empty());
    }

    #[test]
    fn arrows_scroll_output() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.log().scroll(), 1);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.log().scroll(), 0);
    }
}
