use crossterm::event::{Event, KeyCode, KeyEvent};
use login_core::handler;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

/// The fields of the login form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Who are you?
    Username,

    /// What's your password?
    Password,
}

impl Field {
    /// Every field, in tab order
    const ALL: [Field; 2] = [Field::Username, Field::Password];

    /// Rotate through the fields (e.g. with tab)
    fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Rotate through the fields in reverse (e.g. with shift-tab)
    fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A form for entering login information
#[derive(Debug)]
pub struct LoginForm {
    /// Which field we're editing
    active: Field,

    /// Who are you?
    username: Input,

    /// What's your password? (Will be masked)
    password: Input,
}

impl LoginForm {
    /// Render the form in the middle of `body_area`
    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&self, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(6)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let width = popup_area.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor

        let fields = Layout::vertical(Constraint::from_lengths([3, 3]));
        let [username_area, password_area] = fields.areas(popup_area);

        for (field, area, input, shown) in [
            (
                Field::Username,
                username_area,
                &self.username,
                self.username.value().to_string(),
            ),
            (
                Field::Password,
                password_area,
                &self.password,
                "*".repeat(self.password.value().chars().count()),
            ),
        ] {
            let scroll = input.visual_scroll(width as usize);
            let active = self.active == field;

            let widget = Paragraph::new(shown).scroll((0, scroll as u16)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(match field {
                        Field::Username => "Username",
                        Field::Password => "Password",
                    })
                    .border_style(Style::default().fg(if active {
                        Color::Blue
                    } else {
                        Color::DarkGray
                    })),
            );

            frame.render_widget(widget, area);

            if active {
                frame.set_cursor_position((
                    area.x
                        + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                        + 1, // just past the end of the text
                    area.y + 1, // +1 row for the border/title
                ));
            }
        }
    }

    /// Move between fields or edit the active one.
    pub fn handle_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.active = self.active.next();
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();
            }
            _ => {
                let event = Event::Key(key);

                match self.active {
                    Field::Username => self.username.handle_event(&event),
                    Field::Password => self.password.handle_event(&event),
                };
            }
        }
    }
}

impl handler::Form for LoginForm {
    fn username(&self) -> String {
        self.username.value().to_string()
    }

    fn password(&self) -> String {
        self.password.value().to_string()
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            active: Field::Username,
            username: Input::default(),
            password: Input::default(),
        }
    }
}
