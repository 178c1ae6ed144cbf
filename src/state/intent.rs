//! Input Intents
//!
//! Keyboard keys and the on-screen console buttons both translate to an
//! `Intent`; nothing downstream sees platform events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    Select,
    Back,
    BrowseNext,
    BrowsePrev,
}

impl Intent {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Intent::MoveUp),
            "ArrowDown" => Some(Intent::MoveDown),
            "ArrowLeft" => Some(Intent::BrowsePrev),
            "ArrowRight" => Some(Intent::BrowseNext),
            "Enter" => Some(Intent::Select),
            "Escape" => Some(Intent::Back),
            _ => None,
        }
    }
}

/// On-screen console buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleButton {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
}

impl ConsoleButton {
    pub const ALL: [ConsoleButton; 6] = [
        ConsoleButton::Up,
        ConsoleButton::Down,
        ConsoleButton::Left,
        ConsoleButton::Right,
        ConsoleButton::A,
        ConsoleButton::B,
    ];

    pub fn intent(&self) -> Intent {
        match self {
            ConsoleButton::Up => Intent::MoveUp,
            ConsoleButton::Down => Intent::MoveDown,
            ConsoleButton::Left => Intent::BrowsePrev,
            ConsoleButton::Right => Intent::BrowseNext,
            ConsoleButton::A => Intent::Select,
            ConsoleButton::B => Intent::Back,
        }
    }

    /// CSS class of the button hit zone
    pub fn class(&self) -> &'static str {
        match self {
            ConsoleButton::Up => "btn btn-up",
            ConsoleButton::Down => "btn btn-down",
            ConsoleButton::Left => "btn btn-left",
            ConsoleButton::Right => "btn btn-right",
            ConsoleButton::A => "btn btn-a",
            ConsoleButton::B => "btn btn-b",
        }
    }
}
