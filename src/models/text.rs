//! Snapshot of the text around the cursor, as reported by the host.

use serde::{Deserialize, Serialize};

/// Characters that end a word.
pub const WORD_DELIMITERS: &[char] = &[
    '!', '.', '?', ',', ';', ':', '(', ')', '[', ']', '{', '}', '<', '>', ' ', '\n',
];

/// Characters that end a sentence.
pub const SENTENCE_DELIMITERS: &[char] = &['!', '.', '?'];

/// Text immediately before and after the cursor.
///
/// `None` means the host did not report any context, which is treated as
/// the start of a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextSnapshot {
    /// Text before the cursor
    pub before: Option<String>,
    /// Text after the cursor
    pub after: Option<String>,
}

/// Edit that replaces trailing spaces with a sentence terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceEnding {
    /// Characters to delete backward first
    pub delete_backward: usize,
    /// Text inserted afterwards
    pub insert: &'static str,
}

impl TextSnapshot {
    /// Creates a snapshot with text before the cursor only.
    pub fn before(text: impl Into<String>) -> Self {
        Self {
            before: Some(text.into()),
            after: None,
        }
    }

    /// Whether the cursor is at the start of a new word.
    #[must_use]
    pub fn is_cursor_at_new_word(&self) -> bool {
        match self.before.as_deref() {
            None => true,
            Some(text) => text
                .chars()
                .last()
                .is_none_or(|last| WORD_DELIMITERS.contains(&last)),
        }
    }

    /// Whether the cursor is at the start of a new sentence.
    ///
    /// Whitespace and newlines are ignored, so `"Hi. "` starts a new sentence.
    #[must_use]
    pub fn is_cursor_at_new_sentence(&self) -> bool {
        self.before.as_deref().is_none_or(is_last_sentence_ended)
    }

    /// Whether the cursor is at a new sentence that is already followed by
    /// whitespace (`"Hi. "` but not `"Hi."`).
    #[must_use]
    pub fn is_cursor_at_new_sentence_with_trailing_whitespace(&self) -> bool {
        self.before
            .as_deref()
            .is_none_or(is_last_sentence_ended_with_trailing_whitespace)
    }

    /// Edit that closes the sentence before the cursor, if a word ends there.
    ///
    /// Trailing spaces are removed and `". "` is inserted in their place.
    #[must_use]
    pub fn sentence_ending(&self) -> Option<SentenceEnding> {
        let before = self.before.as_deref()?;
        let word = before.trim_end_matches(' ');
        let last = word.chars().last()?;
        if WORD_DELIMITERS.contains(&last) {
            return None;
        }
        Some(SentenceEnding {
            delete_backward: before.len() - word.len(),
            insert: ". ",
        })
    }
}

fn is_last_sentence_ended(text: &str) -> bool {
    let content: String = text.trim().chars().filter(|c| *c != '\n').collect();
    content
        .chars()
        .last()
        .is_none_or(|last| SENTENCE_DELIMITERS.contains(&last))
}

fn is_last_sentence_ended_with_trailing_whitespace(text: &str) -> bool {
    let trimmed = text.trim();
    let Some(last_trimmed) = trimmed.chars().last() else {
        return true;
    };
    let ends_with_whitespace = text.chars().last().is_some_and(char::is_whitespace);
    SENTENCE_DELIMITERS.contains(&last_trimmed) && ends_with_whitespace
}
