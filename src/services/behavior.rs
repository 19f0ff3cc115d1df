//! Keyboard type transitions after gestures.
//!
//! [`KeyboardBehavior`] recommends the next keyboard variant and decides
//! when a double shift tap locks caps, when a double space closes a
//! sentence, and how much a held backspace deletes. It never writes the
//! context; the caller applies the recommendation through
//! [`crate::services::reduce`].
//!
//! Every timing decision takes `now` explicitly so callers and tests control
//! the clock.

use crate::config::BehaviorSettings;
use crate::models::{KeyAction, KeyboardCase, KeyboardContext, KeyboardGesture, KeyboardVariant};
use chrono::{DateTime, TimeDelta, Utc};

/// Seconds the recorded shift tap is pushed back after a double tap, so a
/// third quick tap starts a new pair.
const DOUBLE_TAP_RESET_SECONDS: i64 = 1;

/// Text range removed by one backspace repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteBackwardRange {
    /// One character
    Character,
    /// The word before the cursor
    Word,
}

/// Gesture-driven keyboard type policy with its two tap timers.
#[derive(Debug, Clone, Default)]
pub struct KeyboardBehavior {
    settings: BehaviorSettings,
    last_shift_check: Option<DateTime<Utc>>,
    last_space_tap: Option<DateTime<Utc>>,
}

impl KeyboardBehavior {
    /// Creates a policy with the given thresholds and no recorded taps.
    #[must_use]
    pub const fn new(settings: BehaviorSettings) -> Self {
        Self {
            settings,
            last_shift_check: None,
            last_space_tap: None,
        }
    }

    /// Active thresholds.
    #[must_use]
    pub const fn settings(&self) -> &BehaviorSettings {
        &self.settings
    }

    /// Variant to show after `gesture` on `action`.
    ///
    /// A double shift tap locks caps on the current letter family. A
    /// keyboard type key switches to its target. Shift keeps the current
    /// variant, the shift action itself handles the case. Any other release
    /// moves to [`KeyboardContext::preferred_keyboard_type`].
    pub fn preferred_keyboard_type(
        &mut self,
        gesture: KeyboardGesture,
        action: &KeyAction,
        context: &KeyboardContext,
        now: DateTime<Utc>,
    ) -> KeyboardVariant {
        let current = &context.keyboard_type;
        if self.should_switch_to_caps_lock(gesture, action, now) {
            if let Some(locked) = caps_locked(current) {
                return locked;
            }
        }

        match action {
            KeyAction::KeyboardType(target) => target.clone(),
            KeyAction::Shift(_) => current.clone(),
            _ if gesture == KeyboardGesture::Release => context.preferred_keyboard_type(),
            _ => current.clone(),
        }
    }

    /// Variant to show after the host text changed, if it differs from the
    /// current one.
    #[must_use]
    pub fn keyboard_type_after_text_change(context: &KeyboardContext) -> Option<KeyboardVariant> {
        let preferred = context.preferred_keyboard_type();
        (preferred != context.keyboard_type).then_some(preferred)
    }

    /// Whether a shift release completes a double tap.
    ///
    /// Only consecutive pairs count: after a detected double tap the
    /// recorded time is moved one second into the past.
    pub fn should_switch_to_caps_lock(
        &mut self,
        gesture: KeyboardGesture,
        action: &KeyAction,
        now: DateTime<Utc>,
    ) -> bool {
        if gesture != KeyboardGesture::Release || !action.is_shift() {
            return false;
        }

        let is_double_tap = self
            .last_shift_check
            .is_some_and(|last| now - last < self.settings.double_tap_threshold());
        self.last_shift_check = Some(if is_double_tap {
            now - TimeDelta::seconds(DOUBLE_TAP_RESET_SECONDS)
        } else {
            now
        });

        if is_double_tap {
            tracing::debug!("double shift tap, locking caps");
        }
        is_double_tap
    }

    /// Whether a space release should close the sentence before the cursor.
    ///
    /// True when the previous space tap is recent, the cursor starts a new
    /// word but not a new sentence, and the text ends with two spaces. The
    /// space tap time is recorded either way.
    pub fn should_end_sentence(
        &mut self,
        gesture: KeyboardGesture,
        action: &KeyAction,
        context: &KeyboardContext,
        now: DateTime<Utc>,
    ) -> bool {
        if gesture != KeyboardGesture::Release || *action != KeyAction::Space {
            return false;
        }

        let text = &context.text;
        let is_ending_tap = self
            .last_space_tap
            .is_some_and(|last| now - last < self.settings.end_sentence_threshold());
        let is_closable = text
            .before
            .as_deref()
            .is_some_and(|before| before.ends_with("  "));
        let should_close = is_ending_tap
            && text.is_cursor_at_new_word()
            && !text.is_cursor_at_new_sentence()
            && is_closable;
        self.last_space_tap = Some(now);

        if should_close {
            tracing::debug!("double space, ending sentence");
        }
        should_close
    }

    /// Range a held backspace deletes after repeating for `repeat_duration`.
    #[must_use]
    pub fn backspace_range(&self, repeat_duration: TimeDelta) -> DeleteBackwardRange {
        if repeat_duration > self.settings.backspace_word_threshold() {
            DeleteBackwardRange::Word
        } else {
            DeleteBackwardRange::Character
        }
    }
}

fn caps_locked(variant: &KeyboardVariant) -> Option<KeyboardVariant> {
    let lockable = variant.is_alphabetic() || variant.is_chinese_primary() || variant.is_custom();
    lockable.then(|| variant.with_case(KeyboardCase::CapsLocked))
}
