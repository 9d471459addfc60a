/// Things that can happen to the app
mod action;
pub use action::Action;

/// Side effects the app asks for
mod effect;
pub use effect::{Effect, EffectContext};

/// The login form itself
mod form;
use form::LoginForm;

/// Modal popovers
mod popover;
use popover::Popover;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use login_core::handler::{self, Activation};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use std::process::ExitCode;

/// The "functional core" of the app.
pub struct App {
    /// The server we log into, for showing where we ended up
    server: String,

    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// Which screen we're on
    screen: Screen,

    /// What's shown on top of the screen, if anything
    popover: Option<Popover>,
}

impl App {
    /// Create a new instance of the app
    pub fn new(server: String) -> Self {
        Self {
            server,
            status_line: None,
            screen: Screen::Form(LoginForm::default()),
            popover: None,
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        match &self.screen {
            Screen::Form(form) => form.render(body_area, frame),
            Screen::Dashboard(url) => frame.render_widget(
                Paragraph::new(vec![
                    Line::from("Logged in!".bold()),
                    Line::from(""),
                    Line::from(format!("Continue at {url}")),
                ])
                .centered(),
                body_area,
            ),
            Screen::Exiting(_) => frame.render_widget(Paragraph::new("Exiting…"), body_area),
        }

        if let Some(popover) = &self.popover {
            popover.render(frame, body_area);
        }

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.as_str(),
            None => "F1 for help",
        })
        .style(Style::new().dark_gray());

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side
    /// effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return vec![];
                }

                if let Some(popover) = &self.popover {
                    let closes = match popover {
                        Popover::Alert(_) => matches!(key.code, KeyCode::Enter | KeyCode::Esc),
                        Popover::Help => matches!(
                            key.code,
                            KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::F(1)
                        ),
                    };

                    if closes {
                        self.popover = None;
                    }

                    return vec![];
                }

                self.handle_key(key)
            }
            Action::Navigated(path) => {
                if !matches!(self.screen, Screen::Exiting(_)) {
                    let url = format!("{}{path}", self.server.trim_end_matches('/'));
                    self.status_line = Some(format!("Navigated to {url}"));
                    self.screen = Screen::Dashboard(url);
                    self.popover = None;
                }

                vec![]
            }
            Action::Alerted(message) => {
                self.status_line = None;
                self.popover = Some(Popover::Alert(message));

                vec![]
            }
            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    /// Handle a key press when no popover is open
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::F(1) {
            self.popover = Some(Popover::Help);
            return vec![];
        }

        match &mut self.screen {
            Screen::Form(form) => match key.code {
                KeyCode::Enter => {
                    // Enter is consumed here; it never reaches the focused input.
                    let credentials = handler::collect(&mut KeyPress(key), &*form);

                    self.status_line = Some("Logging in…".to_owned());

                    vec![Effect::LogIn(credentials)]
                }
                KeyCode::Esc => {
                    self.screen = Screen::Exiting(ExitCode::SUCCESS);

                    vec![]
                }
                _ => {
                    form.handle_event(key);

                    vec![]
                }
            },
            Screen::Dashboard(_) => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.screen = Screen::Exiting(ExitCode::SUCCESS);
                    }
                    KeyCode::Char('?') => self.popover = Some(Popover::Help),
                    _ => {}
                }

                vec![]
            }
            Screen::Exiting(_) => vec![],
        }
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        if let Screen::Exiting(code) = &self.screen {
            Some(*code)
        } else {
            None
        }
    }
}

/// Where the app is
#[derive(Debug)]
enum Screen {
    /// Waiting for the user to log in
    Form(LoginForm),

    /// Logged in; holds the full URL we navigated to
    Dashboard(String),

    /// We're done and want the following exit code after final effects
    Exiting(ExitCode),
}

/// The enter key, as the form's submit trigger. The app never forwards it
/// to the form, so there is no default left to prevent.
#[derive(Debug)]
struct KeyPress(KeyEvent);

impl Activation for KeyPress {
    fn prevent_default(&mut self) {
        tracing::trace!(key = ?self.0.code, "submit key consumed");
    }
}
