//! User-authored keyboard definitions.
//!
//! Definitions are parsed from YAML by [`crate::parser::parse_custom_keyboards_str`];
//! the types here hold the already-resolved actions and widths.

use crate::models::{Insets, KeyAction, KeySwipe, KeyboardVariant, Orientation, WidthUnit};
use anyhow::Result;
use std::collections::HashSet;

/// Value that may differ between portrait and landscape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oriented<T> {
    /// Portrait value
    pub portrait: T,
    /// Landscape value
    pub landscape: T,
}

impl<T: Copy> Oriented<T> {
    /// Same value in both orientations.
    pub const fn uniform(value: T) -> Self {
        Self {
            portrait: value,
            landscape: value,
        }
    }

    /// Value for an orientation.
    pub const fn get(&self, orientation: Orientation) -> T {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }
}

/// One key of a custom keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomKey {
    /// Bound action
    pub action: KeyAction,
    /// Width per orientation
    pub width: Oriented<WidthUnit>,
    /// Label drawn on the key, empty for the action's default
    pub label: String,
    /// Whether the key goes through the phonetic engine
    pub process_by_engine: bool,
    /// Swipe bindings
    pub swipes: Vec<KeySwipe>,
}

impl CustomKey {
    /// Creates an `Input`-width key.
    ///
    /// Spacers always take `Available` width.
    #[must_use]
    pub fn new(action: KeyAction) -> Self {
        let width = if action.is_spacer() {
            WidthUnit::Available
        } else {
            WidthUnit::Input
        };
        Self {
            action,
            width: Oriented::uniform(width),
            label: String::new(),
            process_by_engine: true,
            swipes: Vec::new(),
        }
    }
}

/// One row of a custom keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRow {
    /// Keys in order
    pub keys: Vec<CustomKey>,
    /// Row height overriding the keyboard's
    pub row_height: Option<Oriented<f64>>,
}

/// A named custom keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomKeyboard {
    /// Unique name, referenced by `keyboardType(custom(name))`
    pub name: String,
    /// Rows in order
    pub rows: Vec<CustomRow>,
    /// Row height overriding the device geometry
    pub row_height: Option<Oriented<f64>>,
    /// Key insets overriding the device geometry
    pub button_insets: Option<Insets>,
}

impl CustomKeyboard {
    /// Variant that shows this keyboard.
    #[must_use]
    pub fn variant(&self) -> KeyboardVariant {
        KeyboardVariant::custom(self.name.clone())
    }

    /// Row height for a row and orientation, if the definition sets one.
    #[must_use]
    pub fn row_height(&self, row: usize, orientation: Orientation) -> Option<f64> {
        self.rows
            .get(row)
            .and_then(|row| row.row_height)
            .or(self.row_height)
            .map(|height| height.get(orientation))
    }
}

/// All custom keyboards known to the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomKeyboards {
    /// Definitions in file order
    pub keyboards: Vec<CustomKeyboard>,
}

impl CustomKeyboards {
    /// Creates a collection.
    #[must_use]
    pub const fn new(keyboards: Vec<CustomKeyboard>) -> Self {
        Self { keyboards }
    }

    /// Looks up a keyboard by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CustomKeyboard> {
        self.keyboards.iter().find(|keyboard| keyboard.name == name)
    }

    /// Whether no keyboard is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyboards.is_empty()
    }

    /// Checks that names are unique and non-empty, and that every
    /// `keyboardType(custom(..))` key points at a defined keyboard.
    ///
    /// Layout building treats an unknown custom keyboard as a fatal error, so
    /// definitions should pass this check before they are used.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for keyboard in &self.keyboards {
            if keyboard.name.is_empty() {
                anyhow::bail!("Custom keyboard name cannot be empty");
            }
            if !names.insert(keyboard.name.as_str()) {
                anyhow::bail!("Duplicate custom keyboard name: {}", keyboard.name);
            }
        }

        for keyboard in &self.keyboards {
            let targets = keyboard
                .rows
                .iter()
                .flat_map(|row| &row.keys)
                .flat_map(|key| {
                    std::iter::once(&key.action).chain(key.swipes.iter().map(|swipe| &swipe.action))
                })
                .filter_map(KeyAction::keyboard_type_target)
                .filter_map(KeyboardVariant::custom_name);

            for target in targets {
                if !names.contains(target) {
                    anyhow::bail!(
                        "Custom keyboard '{}' references unknown keyboard '{}'",
                        keyboard.name,
                        target
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SwipeDirection;

    fn keyboard(name: &str, keys: Vec<CustomKey>) -> CustomKeyboard {
        CustomKeyboard {
            name: name.to_string(),
            rows: vec![CustomRow {
                keys,
                row_height: None,
            }],
            row_height: None,
            button_insets: None,
        }
    }

    #[test]
    fn test_spacer_key_is_available() {
        let key = CustomKey::new(KeyAction::CharacterMargin("a".to_string()));
        assert_eq!(key.width, Oriented::uniform(WidthUnit::Available));
        let key = CustomKey::new(KeyAction::character("a"));
        assert_eq!(key.width.get(Orientation::Landscape), WidthUnit::Input);
    }

    #[test]
    fn test_row_height_prefers_row() {
        let mut kb = keyboard("t9", vec![CustomKey::new(KeyAction::Space)]);
        assert_eq!(kb.row_height(0, Orientation::Portrait), None);

        kb.row_height = Some(Oriented::uniform(50.0));
        assert_eq!(kb.row_height(0, Orientation::Portrait), Some(50.0));

        kb.rows[0].row_height = Some(Oriented {
            portrait: 60.0,
            landscape: 42.0,
        });
        assert_eq!(kb.row_height(0, Orientation::Landscape), Some(42.0));
    }

    #[test]
    fn test_validate_unknown_reference() {
        let keyboards = CustomKeyboards::new(vec![keyboard(
            "main",
            vec![CustomKey::new(KeyAction::KeyboardType(KeyboardVariant::custom("missing")))],
        )]);
        let err = keyboards.validate().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validate_swipe_reference() {
        let mut key = CustomKey::new(KeyAction::character("a"));
        key.swipes.push(KeySwipe::new(
            SwipeDirection::Up,
            KeyAction::KeyboardType(KeyboardVariant::custom("symbols")),
        ));
        let keyboards = CustomKeyboards::new(vec![
            keyboard("main", vec![key]),
            keyboard("symbols", vec![CustomKey::new(KeyAction::Space)]),
        ]);
        assert!(keyboards.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_names() {
        let keyboards = CustomKeyboards::new(vec![
            keyboard("main", Vec::new()),
            keyboard("main", Vec::new()),
        ]);
        assert!(keyboards.validate().is_err());
    }
}
