//! Keyboard session context read by builders, router and behavior policy.

use crate::config::KeyboardSettings;
use crate::constants::DEFAULT_LOCALE;
use crate::models::{
    DeviceType, KeyAction, KeySwipe, KeyboardCase, KeyboardVariant, LayoutConfiguration,
    Orientation, ReturnKeyType, ScreenSize, TextSnapshot,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Autocapitalization requested by the host text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutocapitalizationType {
    /// Every character
    AllCharacters,
    /// First letter of each sentence
    Sentences,
    /// First letter of each word
    Words,
    /// Never
    None,
}

/// Keyboard kind requested by the host text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum HostKeyboardType {
    /// Regular text
    #[default]
    Default,
    /// E-mail address field
    EmailAddress,
    /// URL field
    Url,
    /// Number pad
    NumberPad,
}

/// Swipe bindings per keyboard family and key action.
///
/// Lookups normalize both sides: letter families use their lowercased
/// variant, and characters and symbols are lowercased.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwipeTable {
    bindings: HashMap<KeyboardVariant, HashMap<KeyAction, Vec<KeySwipe>>>,
}

impl SwipeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds swipes to an action of a keyboard family.
    pub fn insert(&mut self, variant: &KeyboardVariant, action: &KeyAction, swipes: Vec<KeySwipe>) {
        self.bindings
            .entry(Self::variant_key(variant))
            .or_default()
            .insert(action.lowercased(), swipes);
    }

    /// Swipes bound to an action in a keyboard family, empty if none.
    #[must_use]
    pub fn swipes_for(&self, variant: &KeyboardVariant, action: &KeyAction) -> &[KeySwipe] {
        self.bindings
            .get(&Self::variant_key(variant))
            .and_then(|actions| actions.get(&action.lowercased()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether no swipe is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn variant_key(variant: &KeyboardVariant) -> KeyboardVariant {
        match variant {
            KeyboardVariant::Alphabetic(_)
            | KeyboardVariant::Chinese(_)
            | KeyboardVariant::Custom { .. } => variant.with_case(KeyboardCase::Lowercased),
            other => other.clone(),
        }
    }
}

/// Everything a layout query or behavior decision depends on.
///
/// The context is a plain value: it changes only through
/// [`crate::services::reduce`], so two contexts can be compared to decide
/// whether a layout must be rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardContext {
    /// Active keyboard variant
    pub keyboard_type: KeyboardVariant,
    /// Device family
    pub device_type: DeviceType,
    /// Interface orientation
    pub orientation: Orientation,
    /// Screen size in points
    pub screen_size: ScreenSize,
    /// Floating (compact) keyboard on a pad
    pub is_floating: bool,
    /// Locale identifier, e.g. "zh-Hans" or "en_US"
    pub locale: String,
    /// Whether automatic capitalization is enabled at all
    pub is_auto_capitalization_enabled: bool,
    /// Autocapitalization forced by the app, wins over the host hint
    pub autocapitalization_override: Option<AutocapitalizationType>,
    /// Autocapitalization hint of the host text field
    pub host_autocapitalization: Option<AutocapitalizationType>,
    /// Keyboard kind requested by the host text field
    pub host_keyboard_type: HostKeyboardType,
    /// Return key semantics of the host text field
    pub return_key_type: Option<ReturnKeyType>,
    /// Whether the host needs a globe key
    pub needs_input_mode_switch_key: bool,
    /// Text around the cursor
    pub text: TextSnapshot,
    /// Layout toggles
    pub settings: KeyboardSettings,
    /// Swipe bindings attached to built keys
    pub swipes: SwipeTable,
}

impl Default for KeyboardContext {
    fn default() -> Self {
        Self {
            keyboard_type: KeyboardVariant::default(),
            device_type: DeviceType::Phone,
            orientation: Orientation::Portrait,
            screen_size: ScreenSize::new(390.0, 844.0),
            is_floating: false,
            locale: DEFAULT_LOCALE.to_string(),
            is_auto_capitalization_enabled: true,
            autocapitalization_override: None,
            host_autocapitalization: None,
            host_keyboard_type: HostKeyboardType::Default,
            return_key_type: None,
            needs_input_mode_switch_key: false,
            text: TextSnapshot::default(),
            settings: KeyboardSettings::default(),
            swipes: SwipeTable::default(),
        }
    }
}

/// Language prefixes written right to left.
const RIGHT_TO_LEFT_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur"];

impl KeyboardContext {
    /// Creates a default context for a device and keyboard variant.
    #[must_use]
    pub fn new(device_type: DeviceType, keyboard_type: KeyboardVariant) -> Self {
        Self {
            device_type,
            keyboard_type,
            ..Self::default()
        }
    }

    /// Sets the orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the screen size.
    #[must_use]
    pub const fn with_screen_size(mut self, screen_size: ScreenSize) -> Self {
        self.screen_size = screen_size;
        self
    }

    /// Sets the layout toggles.
    #[must_use]
    pub fn with_settings(mut self, settings: KeyboardSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the host return key type.
    #[must_use]
    pub fn with_return_key_type(mut self, return_key_type: ReturnKeyType) -> Self {
        self.return_key_type = Some(return_key_type);
        self
    }

    /// Sets the text around the cursor.
    #[must_use]
    pub fn with_text(mut self, text: TextSnapshot) -> Self {
        self.text = text;
        self
    }

    /// Whether the interface is in portrait.
    #[must_use]
    pub const fn is_portrait(&self) -> bool {
        self.orientation.is_portrait()
    }

    /// Standard row geometry for this device, screen and orientation.
    #[must_use]
    pub fn layout_configuration(&self) -> LayoutConfiguration {
        LayoutConfiguration::standard(
            self.device_type,
            self.screen_size,
            self.orientation,
            self.is_floating,
        )
    }

    /// Effective autocapitalization: the override, else the host hint.
    #[must_use]
    pub fn autocapitalization_type(&self) -> Option<AutocapitalizationType> {
        self.autocapitalization_override.or(self.host_autocapitalization)
    }

    /// Whether the locale is written right to left.
    #[must_use]
    pub fn is_right_to_left(&self) -> bool {
        let language = self
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        RIGHT_TO_LEFT_LANGUAGES.contains(&language.as_str())
    }

    /// Keyboard variant the context calls for after a text change.
    ///
    /// Caps-locked alphabetic and Chinese keyboards keep their state, as does
    /// every keyboard while `lock_shift_state` is set. Otherwise the
    /// autocapitalized alphabetic case is preferred, then lowercase after
    /// alphabetic typing, then a return to alphabetic after a single space
    /// typed on the numeric or symbolic keyboard.
    #[must_use]
    pub fn preferred_keyboard_type(&self) -> KeyboardVariant {
        let current = &self.keyboard_type;
        if current.is_alphabetic_with(KeyboardCase::CapsLocked) || current.is_chinese() {
            return current.clone();
        }
        if self.settings.lock_shift_state {
            return current.clone();
        }
        if let Some(variant) = self.preferred_autocapitalized_type(current) {
            return variant;
        }
        if current.is_alphabetic() {
            return KeyboardVariant::Alphabetic(KeyboardCase::Lowercased);
        }
        if let Some(variant) = self.preferred_type_after_non_alpha_space() {
            return variant;
        }
        current.clone()
    }

    fn preferred_autocapitalized_type(&self, current: &KeyboardVariant) -> Option<KeyboardVariant> {
        if !self.is_auto_capitalization_enabled || !current.is_alphabetic() {
            return None;
        }
        let hint = self.autocapitalization_type()?;
        let uppercased = KeyboardVariant::Alphabetic(KeyboardCase::Uppercased);
        let lowercased = KeyboardVariant::Alphabetic(KeyboardCase::Lowercased);
        if self.is_right_to_left() {
            return Some(lowercased);
        }
        let upper = match hint {
            AutocapitalizationType::AllCharacters => true,
            AutocapitalizationType::Sentences => {
                self.text.is_cursor_at_new_sentence_with_trailing_whitespace()
            }
            AutocapitalizationType::Words => self.text.is_cursor_at_new_word(),
            AutocapitalizationType::None => false,
        };
        Some(if upper { uppercased } else { lowercased })
    }

    fn preferred_type_after_non_alpha_space(&self) -> Option<KeyboardVariant> {
        if !matches!(
            self.keyboard_type,
            KeyboardVariant::Numeric | KeyboardVariant::Symbolic
        ) {
            return None;
        }
        let before = self.text.before.as_deref()?;
        if !before.ends_with(' ') || before.ends_with("  ") {
            return None;
        }
        let alphabetic = KeyboardVariant::Alphabetic(KeyboardCase::Lowercased);
        Some(self.preferred_autocapitalized_type(&alphabetic).unwrap_or(alphabetic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SwipeDirection;

    fn unlocked(variant: KeyboardVariant) -> KeyboardContext {
        let mut context = KeyboardContext::new(DeviceType::Phone, variant);
        context.settings.lock_shift_state = false;
        context
    }

    #[test]
    fn test_swipe_table_normalizes_lookup() {
        let mut table = SwipeTable::new();
        let swipe = KeySwipe::new(SwipeDirection::Up, KeyAction::character("1"));
        table.insert(
            &KeyboardVariant::Chinese(KeyboardCase::Lowercased),
            &KeyAction::character("q"),
            vec![swipe.clone()],
        );

        let found = table.swipes_for(
            &KeyboardVariant::Chinese(KeyboardCase::CapsLocked),
            &KeyAction::character("Q"),
        );
        assert_eq!(found, &[swipe]);
        assert!(table
            .swipes_for(&KeyboardVariant::Numeric, &KeyAction::character("q"))
            .is_empty());
    }

    #[test]
    fn test_right_to_left_locales() {
        let mut context = KeyboardContext::default();
        context.locale = "ar_SA".to_string();
        assert!(context.is_right_to_left());
        context.locale = "he".to_string();
        assert!(context.is_right_to_left());
        context.locale = "en-US".to_string();
        assert!(!context.is_right_to_left());
    }

    #[test]
    fn test_preferred_keeps_chinese_and_caps_lock() {
        let context = unlocked(KeyboardVariant::Chinese(KeyboardCase::Uppercased));
        assert_eq!(context.preferred_keyboard_type(), context.keyboard_type);

        let context = unlocked(KeyboardVariant::Alphabetic(KeyboardCase::CapsLocked));
        assert_eq!(context.preferred_keyboard_type(), context.keyboard_type);
    }

    #[test]
    fn test_preferred_respects_lock_shift_state() {
        let mut context = KeyboardContext::new(
            DeviceType::Phone,
            KeyboardVariant::Alphabetic(KeyboardCase::Uppercased),
        );
        context.host_autocapitalization = Some(AutocapitalizationType::None);
        assert_eq!(context.preferred_keyboard_type(), context.keyboard_type);
    }

    #[test]
    fn test_preferred_sentences_autocapitalization() {
        let mut context = unlocked(KeyboardVariant::Alphabetic(KeyboardCase::Lowercased));
        context.host_autocapitalization = Some(AutocapitalizationType::Sentences);
        context.text = TextSnapshot::before("Done. ");
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Uppercased)
        );

        context.text = TextSnapshot::before("Done and ");
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
        );
    }

    #[test]
    fn test_override_wins_over_host_hint() {
        let mut context = unlocked(KeyboardVariant::Alphabetic(KeyboardCase::Lowercased));
        context.host_autocapitalization = Some(AutocapitalizationType::None);
        context.autocapitalization_override = Some(AutocapitalizationType::AllCharacters);
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Uppercased)
        );
    }

    #[test]
    fn test_right_to_left_is_lowercased() {
        let mut context = unlocked(KeyboardVariant::Alphabetic(KeyboardCase::Uppercased));
        context.locale = "fa".to_string();
        context.host_autocapitalization = Some(AutocapitalizationType::AllCharacters);
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
        );
    }

    #[test]
    fn test_alphabetic_without_hint_is_lowercased() {
        let context = unlocked(KeyboardVariant::Alphabetic(KeyboardCase::Uppercased));
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
        );
    }

    #[test]
    fn test_numeric_returns_to_alphabetic_after_single_space() {
        let mut context = unlocked(KeyboardVariant::Numeric);
        context.text = TextSnapshot::before("42 ");
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
        );

        context.host_autocapitalization = Some(AutocapitalizationType::Words);
        assert_eq!(
            context.preferred_keyboard_type(),
            KeyboardVariant::Alphabetic(KeyboardCase::Uppercased)
        );

        context.text = TextSnapshot::before("42  ");
        assert_eq!(context.preferred_keyboard_type(), KeyboardVariant::Numeric);
    }
}
