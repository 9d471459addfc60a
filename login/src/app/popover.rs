use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Modal states shown above the current screen. While one is open, it gets
/// all the keys.
#[derive(Debug, PartialEq, Eq)]
pub enum Popover {
    /// Show a table of keyboard shortcuts
    Help,

    /// The server said no; show its message until dismissed
    Alert(String),
}

impl Popover {
    /// Render the popover in the middle of `body_area`
    pub fn render(&self, frame: &mut Frame<'_>, body_area: Rect) {
        let popup_vert = Layout::vertical([Constraint::Percentage(40)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);

        frame.render_widget(Clear, popup_area);

        match self {
            Popover::Help => {
                let popup = Table::new(
                    [
                        Row::new(vec!["F1 (form), ? / F1 (dashboard)", "Display this help"]),
                        Row::new(vec!["tab", "Next field"]),
                        Row::new(vec!["shift-tab", "Previous field"]),
                        Row::new(vec!["enter", "Log in"]),
                        Row::new(vec!["escape", "Quit / Close popover"]),
                        Row::new(vec!["q (dashboard)", "Quit"]),
                    ],
                    [Constraint::Max(30), Constraint::Fill(1)],
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Keyboard Shortcuts")
                        .padding(Padding::horizontal(1))
                        .border_style(Style::new().blue()),
                );

                frame.render_widget(popup, popup_area);
            }
            Popover::Alert(message) => {
                let popup = Paragraph::new(message.as_str())
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Login failed")
                            .title_bottom("enter / escape to dismiss")
                            .padding(Padding::horizontal(1))
                            .border_style(Style::new().red()),
                    );

                frame.render_widget(popup, popup_area);
            }
        }
    }
}
