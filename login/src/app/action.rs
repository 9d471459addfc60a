use crossterm::event::KeyEvent;

/// Things that can happen to this app
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// A login was accepted and we should go to the given path
    Navigated(String),

    /// A login was rejected and the user needs to see why
    Alerted(String),

    /// Something bad happened; display it to the user
    Problem(String),
}
