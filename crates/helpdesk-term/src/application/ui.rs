use std::io;
use std::io::Stdout;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::configuration::{Config, ConfigKey};
use crate::domain::models::{Action, Author, Event, Message};
use crate::domain::services::{ActionsService, AppState, EventsService};
use crate::infrastructure::BackendManager;

const EMPTY_HINT: &str = "Welcome! Ask about orders, refunds, or support hours.";
const TYPING_HINT: &str = "assistant is typing...";
const ESCALATION_MARKER: &str = " [needs human]";
const KEYBINDS: &str = "Enter send | Ctrl+S summarize | Up/Down scroll | Ctrl+C quit";

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Tear the terminal down from a panic handler, where the usual cleanup
/// path is unreachable and errors cannot go anywhere.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = execute!(io::stdout(), cursor::Show);
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

fn restore_terminal() -> Result<()> {
    execute!(
        io::stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    disable_raw_mode()?;
    Ok(())
}

fn build_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title("Message (Enter to send)"),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea
}

/// Word-wrap one raw line to the given width. Lines are pre-wrapped so the
/// scroll offset can work in exact rendered lines.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let mut wrapped = vec![];
    let mut current = String::new();
    for word in line.split_whitespace() {
        let mut word = word.to_string();
        // Hard-split words wider than the viewport.
        while word.chars().count() > width {
            let head: String = word.chars().take(width).collect();
            let tail: String = word.chars().skip(width).collect();
            if !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            wrapped.push(head);
            word = tail;
        }

        let needed = word.chars().count() + if current.is_empty() { 0 } else { 1 };
        if current.chars().count() + needed > width && !current.is_empty() {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || wrapped.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let (label, label_style) = match message.author {
        Author::User => ("You", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Author::Assistant => (
            "Assistant",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
    };

    let mut header = vec![
        Span::styled(label.to_string(), label_style),
        Span::styled(
            format!(" {}", message.timestamp),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if message.escalated {
        header.push(Span::styled(
            ESCALATION_MARKER.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let body_style = if message.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(header)];
    for raw_line in message.text.split('\n') {
        for wrapped in wrap_line(raw_line, width) {
            lines.push(Line::from(Span::styled(wrapped, body_style)));
        }
    }
    lines.push(Line::default());
    lines
}

fn render(frame: &mut Frame, app: &mut AppState, textarea: &TextArea) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_transcript(frame, chunks[0], app);
    frame.render_widget(textarea, chunks[1]);
    render_status(frame, chunks[2], app);
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &mut AppState) {
    let width = area.width.saturating_sub(2) as usize;
    let viewport = area.height.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = vec![];
    if app.messages.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }
    for message in &app.messages {
        lines.extend(message_lines(message, width));
    }
    if app.waiting_for_backend() {
        lines.push(Line::from(Span::styled(
            TYPING_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }

    app.sync_scroll(lines.len(), viewport);

    let transcript = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("AI Customer Support"),
        )
        .scroll((app.scroll.position, 0));
    frame.render_widget(transcript, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &AppState) {
    let status = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            KEYBINDS,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(status), area);
}

pub async fn start_loop() -> Result<()> {
    let client = BackendManager::get();
    let user_id = Config::get(ConfigKey::UserId);

    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let worker_event_tx = event_tx.clone();
    let actions_worker = tokio::spawn(async move {
        if let Err(err) =
            ActionsService::start(client, &user_id, worker_event_tx, &mut action_rx).await
        {
            tracing::error!(error = ?err, "actions service stopped");
        }
    });

    let mut terminal = init_terminal()?;
    let mut app = AppState::new();
    let mut events = EventsService::new(event_rx);
    let mut textarea = build_textarea();

    let loop_result = loop {
        if let Err(err) = terminal.draw(|frame| render(frame, &mut app, &textarea)) {
            break Err(err.into());
        }

        match events.next().await {
            Ok(Event::KeyboardCTRLC) => break Ok(()),
            Ok(Event::KeyboardEnter) => {
                let text = textarea.lines().join("\n").trim().to_string();
                if text.is_empty() {
                    continue;
                }
                if let Some(request_id) = app.submit_user_message(&text) {
                    if action_tx
                        .send(Action::SendMessage { request_id, text })
                        .is_err()
                    {
                        break Ok(());
                    }
                }
                textarea = build_textarea();
            }
            Ok(Event::KeyboardCTRLS) => {
                if action_tx.send(Action::Summarize).is_err() {
                    break Ok(());
                }
            }
            Ok(Event::KeyboardCharInput(input)) => {
                textarea.input(input);
            }
            Ok(Event::KeyboardPaste(text)) => {
                textarea.insert_str(&text);
            }
            Ok(Event::UIScrollUp) => app.scroll.up(),
            Ok(Event::UIScrollDown) => app.scroll.down(),
            Ok(Event::UIScrollPageUp) => app.scroll.up_page(),
            Ok(Event::UIScrollPageDown) => app.scroll.down_page(),
            Ok(Event::UITick) => {}
            Ok(backend_event) => app.handle_backend_event(backend_event),
            Err(err) => break Err(err),
        }
    };

    actions_worker.abort();
    restore_terminal()?;
    loop_result
}
