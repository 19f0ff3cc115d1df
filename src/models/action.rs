//! Key actions, return key semantics and gestures.

use crate::models::{KeyboardCase, KeyboardVariant};
use serde::{Deserialize, Serialize};

/// Semantics of the host's return key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnKeyType {
    /// Plain return
    Return,
    /// Done
    Done,
    /// Go
    Go,
    /// Join
    Join,
    /// Soft new line (pad return key)
    NewLine,
    /// Next field
    Next,
    /// Ok
    Ok,
    /// Search
    Search,
    /// Send
    Send,
    /// App-specific title
    Custom(String),
}

impl ReturnKeyType {
    /// Stable identifier (custom types use their title).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Return => "return",
            Self::Done => "done",
            Self::Go => "go",
            Self::Join => "join",
            Self::NewLine => "newLine",
            Self::Next => "next",
            Self::Ok => "ok",
            Self::Search => "search",
            Self::Send => "send",
            Self::Custom(title) => title,
        }
    }

    /// Only plain return and new line render as system keys.
    #[must_use]
    pub const fn is_system_action(&self) -> bool {
        matches!(self, Self::Return | Self::NewLine)
    }
}

/// Action bound to a key. Hashable, but not unique within a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyAction {
    /// Character sent to the phonetic engine
    Character(String),
    /// Invisible filler that aligns a shorter row under a longer one
    CharacterMargin(String),
    /// Symbol inserted directly into the document
    Symbol(String),
    /// Letter group of a Chinese nine-grid key (e.g. "ABC")
    NineGrid(String),
    /// Delete backward
    Backspace,
    /// Shift, carrying the case it was created for
    Shift(KeyboardCase),
    /// Space bar
    Space,
    /// Return/primary key
    Primary(ReturnKeyType),
    /// Switch to another keyboard variant
    KeyboardType(KeyboardVariant),
    /// Tab
    Tab,
    /// Host input-mode switch (globe key)
    NextKeyboard,
    /// Dismiss the keyboard
    DismissKeyboard,
    /// Return to the keyboard shown before the current one
    ReturnLastKeyboard,
    /// Clear the phonetic spelling area
    CleanSpellingArea,
    /// Empty spacer
    None,
    /// App-defined action
    Custom(String),
}

impl KeyAction {
    /// Creates a character action.
    pub fn character(text: impl Into<String>) -> Self {
        Self::Character(text.into())
    }

    /// Creates a symbol action.
    pub fn symbol(text: impl Into<String>) -> Self {
        Self::Symbol(text.into())
    }

    /// Whether this key is rendered and handled as a system key.
    #[must_use]
    pub const fn is_system_action(&self) -> bool {
        match self {
            Self::Backspace
            | Self::Shift(_)
            | Self::KeyboardType(_)
            | Self::Tab
            | Self::NextKeyboard
            | Self::DismissKeyboard
            | Self::ReturnLastKeyboard => true,
            Self::Primary(kind) => kind.is_system_action(),
            _ => false,
        }
    }

    /// Whether this key inserts input (characters, symbols, nine-grid groups).
    #[must_use]
    pub const fn is_input_action(&self) -> bool {
        matches!(
            self,
            Self::Character(_) | Self::Symbol(_) | Self::NineGrid(_)
        )
    }

    /// Whether this key only fills space.
    #[must_use]
    pub const fn is_spacer(&self) -> bool {
        matches!(self, Self::CharacterMargin(_) | Self::None)
    }

    /// Whether this is a shift key, in any case.
    #[must_use]
    pub const fn is_shift(&self) -> bool {
        matches!(self, Self::Shift(_))
    }

    /// Whether this is a return/primary key.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        matches!(self, Self::Primary(_))
    }

    /// Target variant of a keyboard-type switch.
    #[must_use]
    pub const fn keyboard_type_target(&self) -> Option<&KeyboardVariant> {
        match self {
            Self::KeyboardType(target) => Some(target),
            _ => None,
        }
    }

    /// Lowercased form used as a swipe-binding lookup key.
    #[must_use]
    pub fn lowercased(&self) -> Self {
        match self {
            Self::Character(text) => Self::Character(text.to_lowercase()),
            Self::Symbol(text) => Self::Symbol(text.to_lowercase()),
            Self::Shift(_) => Self::Shift(KeyboardCase::Lowercased),
            other => other.clone(),
        }
    }
}

/// Swipe direction on a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Up
    Up,
    /// Down
    Down,
    /// Left
    Left,
    /// Right
    Right,
}

/// Gesture performed on a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardGesture {
    /// Finger down
    Press,
    /// Finger up
    Release,
    /// Two quick taps
    DoubleTap,
    /// Held past the long-press delay
    LongPress,
    /// Repeated while held
    RepeatPress,
    /// Swipe in a direction
    Swipe(SwipeDirection),
}
