//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Key handling for the calculator form
//! - Printing through the configured printer

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::application::CalculatorService;
use crate::config::Config;
use crate::ports::ReportPrinter;

use super::ui::{
    calculator::{render_calculator, CalculatorViewState, FormField, StatusLine},
    reference::render_reference,
    render_disclaimer,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Calculator,
    Reference,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Form snapshot and results
    calculator: CalculatorService,

    /// Focus and status line
    view: CalculatorViewState,

    /// Where reports go on print
    printer: Box<dyn ReportPrinter>,
}

impl App {
    /// Create the application from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_dependencies(CalculatorService::new(), Box::new(config.printer()))
    }

    /// Create the application with an injected calculator and printer.
    #[must_use]
    pub fn with_dependencies(calculator: CalculatorService, printer: Box<dyn ReportPrinter>) -> Self {
        Self {
            screen: Screen::Calculator,
            should_quit: false,
            calculator,
            view: CalculatorViewState::default(),
            printer,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn calculator(&self) -> &CalculatorService {
        &self.calculator
    }

    #[must_use]
    pub fn focused(&self) -> FormField {
        self.view.focused
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusLine> {
        self.view.status.as_ref()
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(f.area());

                match self.screen {
                    Screen::Calculator => {
                        render_calculator(f, chunks[0], &self.view, &self.calculator)
                    }
                    Screen::Reference => render_reference(f, chunks[0]),
                }

                render_disclaimer(f, chunks[1]);
            })?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too.
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Calculator => self.handle_calculator_key(key),
            Screen::Reference => self.handle_reference_key(key),
        }
    }

    fn handle_calculator_key(&mut self, key: KeyCode) {
        // Any key dismisses the last print outcome.
        self.view.status = None;
        let focused = self.view.focused;

        match key {
            KeyCode::Up | KeyCode::BackTab => self.view.focused = focused.prev(),
            KeyCode::Down | KeyCode::Tab => self.view.focused = focused.next(),
            KeyCode::Left => self.cycle_selector(focused, false),
            KeyCode::Right | KeyCode::Char(' ') => self.cycle_selector(focused, true),
            KeyCode::Backspace => {
                if let Some(field) = focused.numeric() {
                    self.calculator.pop_char(field);
                }
            }
            KeyCode::Delete => {
                if let Some(field) = focused.numeric() {
                    self.calculator.clear_field(field);
                }
            }
            KeyCode::Enter => {
                self.calculator.calculate();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.calculator.reset();
                self.view.focused = FormField::default();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => self.print(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.calculator.load_sample(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.screen = Screen::Reference,
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char(c) => {
                if let Some(field) = focused.numeric() {
                    self.calculator.push_char(field, c);
                }
            }
            _ => {}
        }
    }

    fn handle_reference_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => {
                self.screen = Screen::Calculator;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn cycle_selector(&mut self, field: FormField, forward: bool) {
        let form = self.calculator.form();
        match field {
            FormField::Sex => {
                let sex = if forward { form.sex.next() } else { form.sex.prev() };
                self.calculator.set_sex(sex);
            }
            FormField::Setting => {
                let setting = if forward {
                    form.setting.next()
                } else {
                    form.setting.prev()
                };
                self.calculator.set_setting(setting);
            }
            FormField::Hemoglobin | FormField::Egfr => {}
        }
    }

    fn print(&mut self) {
        self.view.status = Some(match self.calculator.print(self.printer.as_ref()) {
            Ok(receipt) => StatusLine {
                message: receipt.to_string(),
                is_error: false,
            },
            Err(e) => StatusLine {
                message: format!("Print failed: {e}"),
                is_error: true,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FilePrinter, ReportFormat};
    use crate::domain::{ScoreBand, Setting, Sex};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key, KeyModifiers::NONE);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn test_app(dir: &std::path::Path) -> App {
        App::with_dependencies(
            CalculatorService::new(),
            Box::new(FilePrinter::new(dir, ReportFormat::Text)),
        )
    }

    #[test]
    fn test_full_entry_by_keyboard() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        press(&mut app, &[KeyCode::Right]); // male
        press(&mut app, &[KeyCode::Down, KeyCode::Left]); // icu
        press(&mut app, &[KeyCode::Down]);
        type_text(&mut app, "8");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "50");
        press(&mut app, &[KeyCode::Enter]);

        let calc = app.calculator();
        assert_eq!(calc.form().sex, Sex::Male);
        assert_eq!(calc.form().setting, Setting::Icu);
        assert_eq!(calc.display().total_score, Some(17));
        assert_eq!(calc.display().band, Some(ScoreBand::Above15));
    }

    #[test]
    fn test_letters_do_not_reach_numeric_fields() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.focused(), FormField::Hemoglobin);
        type_text(&mut app, "1x2");
        assert_eq!(app.calculator().form().hemoglobin.expose(), "12");

        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.calculator().form().hemoglobin.expose(), "1");
        press(&mut app, &[KeyCode::Delete]);
        assert!(app.calculator().form().hemoglobin.expose().is_empty());
    }

    #[test]
    fn test_reset_key() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        press(&mut app, &[KeyCode::Char('s'), KeyCode::Enter, KeyCode::Down]);
        assert_eq!(app.calculator().display().total_score, Some(17));

        press(&mut app, &[KeyCode::Char('r')]);
        assert!(app.calculator().display().is_blank());
        assert_eq!(app.focused(), FormField::Sex);
        assert_eq!(app.calculator().form().sex, Sex::Female);
    }

    #[test]
    fn test_print_key_sets_status() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        press(&mut app, &[KeyCode::Char('p')]);
        let status = app.status().expect("Status after print");
        assert!(!status.is_error);
        assert!(status.message.starts_with("Report saved to"));
        assert_eq!(std::fs::read_dir(dir.path()).expect("Should list").count(), 1);

        press(&mut app, &[KeyCode::Down]);
        assert!(app.status().is_none());
    }

    #[test]
    fn test_reference_screen_navigation() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());

        press(&mut app, &[KeyCode::Char('t')]);
        assert_eq!(app.screen(), Screen::Reference);
        // Typing on the reference screen does nothing.
        type_text(&mut app, "12");
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.screen(), Screen::Calculator);
        assert!(app.calculator().form().hemoglobin.expose().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = test_app(dir.path());
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());

        let mut app = test_app(dir.path());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
