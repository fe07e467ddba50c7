//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use unitconv_core::{Category, ConversionRequest};
use unitconv_session::{ConversionRecord, Session};

use crate::chart::render_result;
use crate::error::{parse_value, TuiError};
use crate::footer::render_footer;
use crate::form::{render_form, FormView};
use crate::header::render_header;
use crate::history::render_history;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

/// Form field holding the keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Source,
    Target,
    Value,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Category, Field::Source, Field::Target, Field::Value];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous field, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Step `index` by one within `len` options, wrapping in both directions.
fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Field with keyboard focus.
    pub focus: Field,
    pub category_index: usize,
    pub source_index: usize,
    pub target_index: usize,
    /// Raw text of the value field.
    pub input: String,
    /// Latest successful conversion.
    pub result: Option<ConversionRecord>,
    /// Error from the last submit, shown instead of the gauge.
    pub status: Option<String>,
    /// Show history toggle.
    pub show_history: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    session: Session,
    categories: Vec<Category>,
    theme: ColorTheme,
}

impl TuiApp {
    /// Create a new TUI app over `session`.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let categories = session.registry().categories();
        Self {
            should_quit: false,
            focus: Field::Category,
            category_index: 0,
            source_index: 0,
            target_index: 0,
            input: String::new(),
            result: None,
            status: None,
            show_history: true,
            terminal_width: 80,
            terminal_height: 24,
            session,
            categories,
            theme: ColorTheme::default(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Selected category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.categories
            .get(self.category_index)
            .copied()
            .unwrap_or(Category::Distance)
    }

    /// Units of the selected category, in display order.
    #[must_use]
    pub fn units(&self) -> Vec<&'static str> {
        self.session.registry().units(self.category())
    }

    #[must_use]
    pub fn source_unit(&self) -> &'static str {
        self.units().get(self.source_index).copied().unwrap_or("")
    }

    #[must_use]
    pub fn target_unit(&self) -> &'static str {
        self.units().get(self.target_index).copied().unwrap_or("")
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextField => self.focus = self.focus.next(),
            KeyAction::PrevField => self.focus = self.focus.prev(),
            KeyAction::NextOption => self.change_option(true),
            KeyAction::PrevOption => self.change_option(false),
            KeyAction::Input(c) => {
                self.focus = Field::Value;
                self.input.push(c);
            }
            KeyAction::Backspace => {
                self.focus = Field::Value;
                self.input.pop();
            }
            KeyAction::Submit => self.submit(),
            KeyAction::ToggleHistory => self.show_history = !self.show_history,
            KeyAction::ClearHistory => {
                self.session.clear_history();
                tracing::debug!("history cleared");
            }
            KeyAction::None => {}
        }
    }

    fn change_option(&mut self, forward: bool) {
        match self.focus {
            Field::Category => {
                self.category_index = cycle(self.category_index, self.categories.len(), forward);
                // Unit names differ per category
                self.source_index = 0;
                self.target_index = 0;
            }
            Field::Source => {
                self.source_index = cycle(self.source_index, self.units().len(), forward);
            }
            Field::Target => {
                self.target_index = cycle(self.target_index, self.units().len(), forward);
            }
            Field::Value => {}
        }
    }

    /// Convert the current form and record the result.
    pub fn submit(&mut self) {
        let value = match parse_value(&self.input) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "value field rejected");
                self.status = Some(e.to_string());
                self.result = None;
                return;
            }
        };

        let category = self.category();
        let request =
            ConversionRequest::new(category.name(), self.source_unit(), self.target_unit(), value);
        match self.session.convert(&request) {
            Ok(record) => {
                self.result = Some(record);
                self.status = None;
            }
            Err(e) => {
                self.status = Some(e.to_string());
                self.result = None;
            }
        }
    }

    /// Compute the header / main / footer layout.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(8),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2])
    }

    /// Split the main area into form, gauge and (optionally) history.
    #[must_use]
    pub fn compute_main_layout(main: Rect, show_history: bool) -> (Rect, Rect, Option<Rect>) {
        let (left, history) = if show_history {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(main);
            (columns[0], Some(columns[1]))
        } else {
            (main, None)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // form
                Constraint::Min(3),    // gauge
            ])
            .split(left);

        (rows[0], rows[1], history)
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, main_area, footer_area) = Self::compute_layout(frame.area());
        let (form_area, gauge_area, history_area) =
            Self::compute_main_layout(main_area, self.show_history);

        let category = self.category();
        render_header(frame, header_area, category, &self.theme);

        let view = FormView {
            category: category.name(),
            source: self.source_unit(),
            target: self.target_unit(),
            input: &self.input,
            focus: self.focus,
        };
        render_form(frame, form_area, &view, &self.theme);
        render_result(
            frame,
            gauge_area,
            self.result.as_ref(),
            self.status.as_deref(),
            &self.theme,
        );

        if let Some(area) = history_area {
            render_history(frame, area, self.session.history(), &self.theme);
        }

        render_footer(frame, footer_area, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        let outcome = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        outcome
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                let msg = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        Some(TuiMessage::KeyPress(map_key(key)))
                    }
                    Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
                    _ => None,
                };
                if let Some(msg) = msg {
                    self.handle_message(msg);
                }
            }
        }
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new(Session::new())
    }
}
