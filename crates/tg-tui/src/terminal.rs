//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::shared::wrapped_height;

/// Upper bound on how long the loop waits for input when decay is off.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Launch the TUI application. The app should already be booted.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);
    app.session.shutdown();

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Waits for input no longer than the time until the next
/// decay tick, then lets the session catch up.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app
            .session
            .timer()
            .time_until_due(Instant::now())
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            match event::read().map_err(|e| format!("event error: {e}"))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Output
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_output(frame, app, chunks[0]);
    draw_input(frame, app, chunks[1]);

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);
}

fn draw_output(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let lines = app.log().to_lines();

    let total = wrapped_height(&lines, area.width.saturating_sub(2));
    let visible_height = area.height.saturating_sub(2);
    let max_scroll = total.saturating_sub(visible_height);
    let scroll = max_scroll.saturating_sub(app.log().scroll());

    let title = format!(" {} ", app.session.state().cwd());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn draw_input(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let display_text = format!("$ {}", app.input_text);
    let input = Paragraph::new(display_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, area);

    let typed = app.input_text[..app.input_cursor].chars().count();
    let cursor_x = area
        .x
        .saturating_add(3)
        .saturating_add(u16::try_from(typed).unwrap_or(u16::MAX));
    let cursor_y = area.y + 1;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn status_line(app: &TuiApp) -> String {
    let pet = app.session.state().pet();
    format!(
        " {}  Hunger {}/10 ({})  Happiness {}/10 ({})  \u{2502}  Enter:send  Esc:clear  \u{2191}\u{2193}:scroll  Ctrl+S:save  Ctrl+O:load  Ctrl+C:quit",
        app.session.state().pet_name(),
        pet.hunger,
        pet.hunger_mood(),
        pet.happiness,
        pet.happiness_mood(),
    )
}
