//! Terminal front-end
//!
//! Draws the countdown widget and translates key presses into engine
//! commands. The loop is the only driver of the engine: it schedules one
//! tick per second while the countdown is running and stops mattering the
//! moment it stops calling.

pub mod format;

use std::io::{self, Stdout};

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::time::{interval, Duration};
use tracing::warn;

use crate::{
    clock,
    state::CountdownEngine,
    storage::StoreError,
    utils::shutdown_signal,
};

const HOUR_SECONDS: f64 = 3_600.0;

/// Run the widget until the user quits or a shutdown signal arrives.
///
/// Raw mode and the alternate screen are restored on every exit path.
pub async fn run(engine: &mut CountdownEngine) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, engine).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    engine: &mut CountdownEngine,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = interval(Duration::from_secs(1));
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        terminal.draw(|frame| draw(frame, &*engine))?;

        tokio::select! {
            _ = ticker.tick() => {
                if engine.is_running() {
                    log_save_failure(engine.tick(clock::unix_now()));
                }
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_key(engine, key.code, key.modifiers) {
                            return Ok(());
                        }
                    }
                    // Resize and the rest redraw on the next pass
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                    }
                    None => return Ok(()),
                }
            }
            _ = &mut shutdown => {
                return Ok(());
            }
        }
    }
}

/// Apply one key press. Returns true when the user asked to quit.
fn handle_key(engine: &mut CountdownEngine, code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char(' ') => log_save_failure(engine.toggle(clock::unix_now())),
        KeyCode::Char('+') | KeyCode::Char('=') => log_save_failure(engine.adjust(HOUR_SECONDS)),
        KeyCode::Char('-') | KeyCode::Char('_') => log_save_failure(engine.adjust(-HOUR_SECONDS)),
        _ => {}
    }
    false
}

/// Persistence problems never interrupt the widget; the in-memory state
/// stays authoritative until the next successful save.
fn log_save_failure(result: Result<(), StoreError>) {
    if let Err(e) = result {
        warn!("Progress not saved: {}", e);
    }
}

fn draw(frame: &mut Frame, engine: &CountdownEngine) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(frame.area());

    let (status_text, status_style) = if engine.is_running() {
        (
            "RUNNING",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "STOPPED",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    let remaining = engine.remaining_seconds();
    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            format::format_hours(remaining),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("({})", format::format_clock(remaining)),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(status_text, status_style)),
    ];
    let widget = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" hourbank "));
    frame.render_widget(widget, chunks[0]);

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let help = Line::from(vec![
        Span::styled("Space", key_style),
        Span::styled(": start/stop", text_style),
        Span::raw(" | "),
        Span::styled("+", key_style),
        Span::styled(": +1h", text_style),
        Span::raw(" | "),
        Span::styled("-", key_style),
        Span::styled(": -1h", text_style),
        Span::raw(" | "),
        Span::styled("q", key_style),
        Span::styled(": quit", text_style),
    ]);
    let status_bar = Paragraph::new(help).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(status_bar, chunks[1]);
}
