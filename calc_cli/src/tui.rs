//! Interactive keypad.
//!
//! Owns the terminal while running: raw mode, alternate screen, and a redraw
//! after every key. Keyboard keys map onto the engine's keyboard vocabulary,
//! with single letters for the buttons that have no natural key.

use crate::error::Result;
use calc_core::engine::{CalculatorEngine, Phase};
use calc_core::input::{InputToken, Key};
use calc_core::operators::{AngleMode, TrigFunction};
use calc_core::settings::EngineSettings;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};
use std::io;
use tracing::{debug, info};

const HELP: [(&str, &str); 8] = [
    ("0-9 .", "digits and decimal point"),
    ("+ - * /", "operators"),
    ("Enter =", "calculate"),
    ("s o t", "sin cos tan"),
    ("p", "insert pi"),
    ("d r", "degrees / radians"),
    ("Esc c", "clear, Backspace deletes"),
    ("q", "quit"),
];

/// What a terminal key asks the keypad to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press(Key),
    Quit,
    Ignore,
}

pub struct App {
    calc: CalculatorEngine,
    should_quit: bool,
}

impl App {
    pub fn new(settings: EngineSettings) -> Self {
        App {
            calc: CalculatorEngine::with_settings(settings),
            should_quit: false,
        }
    }

    pub fn calc(&self) -> &CalculatorEngine {
        &self.calc
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        match map_key(&event) {
            Action::Press(key) => {
                self.calc.press(key);
                debug!(key = %key.token(), display = %self.calc.display_value(), "pressed");
            }
            Action::Quit => self.should_quit = true,
            Action::Ignore => {}
        }
    }
}

pub fn map_key(event: &KeyEvent) -> Action {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Action::Quit,
            _ => Action::Ignore,
        };
    }

    let key = match event.code {
        KeyCode::Enter => Key::from_key_name("Enter"),
        KeyCode::Esc => Key::from_key_name("Escape"),
        KeyCode::Backspace => Key::from_key_name("Backspace"),
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('s') => Some(Key::Function(TrigFunction::Sin)),
        KeyCode::Char('o') => Some(Key::Function(TrigFunction::Cos)),
        KeyCode::Char('t') => Some(Key::Function(TrigFunction::Tan)),
        KeyCode::Char('p') => Some(Key::Number(InputToken::Pi)),
        KeyCode::Char('d') => Some(Key::AngleMode(AngleMode::Degrees)),
        KeyCode::Char('r') => Some(Key::AngleMode(AngleMode::Radians)),
        KeyCode::Char(c) => Key::from_key_name(c.encode_utf8(&mut [0; 4])),
        _ => None,
    };
    key.map_or(Action::Ignore, Action::Press)
}

pub fn run(settings: EngineSettings) -> Result<()> {
    info!("Starting interactive keypad.");
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let mut app = App::new(settings);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    debug!("Keypad closed.");

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| render(frame, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

pub fn render(frame: &mut Frame, app: &App) {
    let calc = app.calc();
    let state = calc.state();

    let [display_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    let display_style = match state.phase() {
        Phase::Error => Style::default().fg(Color::Red),
        _ => Style::default().add_modifier(Modifier::BOLD),
    };
    let display = Paragraph::new(calc.display_value())
        .style(display_style)
        .alignment(Alignment::Right)
        .block(Block::bordered().title(" Keypad "));
    frame.render_widget(display, display_area);

    let mut status = vec![Span::styled(
        format!(" {} ", state.angle_mode.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    if let (Some(previous), Some(op)) = (state.previous_value, state.operator) {
        status.push(Span::raw(format!("  {} {}", calc_core::format::format_number(previous), op)));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);

    let help: Vec<Line> = HELP
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {:<8}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(help), help_area);
}
