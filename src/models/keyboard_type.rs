//! Keyboard variants and shift cases.
//!
//! A [`KeyboardVariant`] names the logical keyboard that is currently on
//! screen. The state machine in `services::behavior` recommends transitions
//! between variants; the router in `services::router` picks a layout builder
//! from the active variant.

use serde::{Deserialize, Serialize};

/// Shift state of a keyboard family that has letter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardCase {
    /// Transient state, replaced by a concrete case while typing
    Auto,
    /// Uppercased state that is never adjusted automatically
    CapsLocked,
    /// Lowercased, follows the host's autocapitalization
    #[default]
    Lowercased,
    /// Uppercased, follows the host's autocapitalization
    Uppercased,
}

impl KeyboardCase {
    /// Stable identifier (e.g. "capsLocked").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::CapsLocked => "capsLocked",
            Self::Lowercased => "lowercased",
            Self::Uppercased => "uppercased",
        }
    }

    /// Whether the case renders lowercased letters.
    #[must_use]
    pub const fn is_lowercased(self) -> bool {
        matches!(self, Self::Lowercased)
    }

    /// Whether the case renders uppercased letters (`uppercased` or `capsLocked`).
    #[must_use]
    pub const fn is_uppercased(self) -> bool {
        matches!(self, Self::Uppercased | Self::CapsLocked)
    }

    /// Applies the case to a key label.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        if self.is_uppercased() {
            text.to_uppercase()
        } else {
            text.to_lowercase()
        }
    }

    /// Parses a case identifier as written in keyboard definitions.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "auto" => Some(Self::Auto),
            "capsLocked" => Some(Self::CapsLocked),
            "lowercased" => Some(Self::Lowercased),
            "uppercased" => Some(Self::Uppercased),
            _ => None,
        }
    }
}

/// The active logical keyboard (language x case x custom name).
///
/// # Families
///
/// - `Alphabetic` / `Chinese` / `Custom` carry a [`KeyboardCase`]
/// - numeric and symbolic variants exist once per language
/// - nine-grid variants are the T9-style 3x3 keyboards
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyboardVariant {
    /// Latin letter keyboard
    Alphabetic(KeyboardCase),
    /// Full Chinese phonetic keyboard
    Chinese(KeyboardCase),
    /// Latin numeric keyboard
    Numeric,
    /// Latin symbolic keyboard
    Symbolic,
    /// Chinese numeric keyboard (full-width punctuation)
    ChineseNumeric,
    /// Chinese symbolic keyboard
    ChineseSymbolic,
    /// Chinese T9 keyboard
    ChineseNineGrid,
    /// Numeric T9 keyboard
    NumericNineGrid,
    /// Categorised symbol keyboard, optionally in its light appearance
    ClassifySymbolic {
        /// Light appearance (used from the numeric nine-grid)
        light: bool,
    },
    /// E-mail keyboard
    Email,
    /// Emoji keyboard
    Emojis,
    /// Image keyboard
    Images,
    /// User-authored keyboard resolved by name
    Custom {
        /// Keyboard definition name
        name: String,
        /// Current shift state
        case: KeyboardCase,
    },
}

impl Default for KeyboardVariant {
    fn default() -> Self {
        Self::Chinese(KeyboardCase::Lowercased)
    }
}

impl KeyboardVariant {
    /// Creates a custom variant in its lowercased state.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom {
            name: name.into(),
            case: KeyboardCase::Lowercased,
        }
    }

    /// Stable identifier, unique per variant and case.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Alphabetic(case) => case.id().to_string(),
            Self::Chinese(case) => format!("chinese_{}", case.id()),
            Self::Numeric => "numeric".to_string(),
            Self::Symbolic => "symbolic".to_string(),
            Self::ChineseNumeric => "chineseNumeric".to_string(),
            Self::ChineseSymbolic => "chineseSymbolic".to_string(),
            Self::ChineseNineGrid => "chineseNineGrid".to_string(),
            Self::NumericNineGrid => "numericNineGrid".to_string(),
            Self::ClassifySymbolic { light: false } => "classifySymbolic".to_string(),
            Self::ClassifySymbolic { light: true } => "classifySymbolicOfLight".to_string(),
            Self::Email => "email".to_string(),
            Self::Emojis => "emojis".to_string(),
            Self::Images => "images".to_string(),
            Self::Custom { name, case } => format!("custom_{name}_{}", case.id()),
        }
    }

    /// Whether this is the Latin letter keyboard.
    #[must_use]
    pub const fn is_alphabetic(&self) -> bool {
        matches!(self, Self::Alphabetic(_))
    }

    /// Whether this is the Latin letter keyboard in the given case.
    #[must_use]
    pub fn is_alphabetic_with(&self, case: KeyboardCase) -> bool {
        matches!(self, Self::Alphabetic(current) if *current == case)
    }

    /// Whether this variant belongs to the Chinese language family.
    #[must_use]
    pub const fn is_chinese(&self) -> bool {
        matches!(
            self,
            Self::Chinese(_) | Self::ChineseNumeric | Self::ChineseSymbolic | Self::ChineseNineGrid
        )
    }

    /// Whether this is the full Chinese letter keyboard.
    #[must_use]
    pub const fn is_chinese_primary(&self) -> bool {
        matches!(self, Self::Chinese(_))
    }

    /// Whether this is a user-authored keyboard.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    /// Whether this is one of the number keyboards.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Self::Numeric | Self::NumericNineGrid | Self::ChineseNumeric
        )
    }

    /// Whether this is one of the symbol keyboards.
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbolic | Self::ChineseSymbolic)
    }

    /// Whether this is the Chinese T9 keyboard.
    #[must_use]
    pub const fn is_chinese_nine_grid(&self) -> bool {
        matches!(self, Self::ChineseNineGrid)
    }

    /// Whether this is the numeric T9 keyboard.
    #[must_use]
    pub const fn is_numeric_nine_grid(&self) -> bool {
        matches!(self, Self::NumericNineGrid)
    }

    /// Whether the numeric/symbolic input grid of this variant has a wide last row.
    #[must_use]
    pub const fn has_wide_symbol_row(&self) -> bool {
        matches!(
            self,
            Self::Numeric | Self::Symbolic | Self::ChineseNumeric | Self::ChineseSymbolic
        )
    }

    /// The shift case, for families that have one.
    #[must_use]
    pub fn case(&self) -> Option<KeyboardCase> {
        match self {
            Self::Alphabetic(case) | Self::Chinese(case) | Self::Custom { case, .. } => {
                Some(*case)
            }
            _ => None,
        }
    }

    /// The same family in another case. Variants without a case are returned unchanged.
    #[must_use]
    pub fn with_case(&self, case: KeyboardCase) -> Self {
        match self {
            Self::Alphabetic(_) => Self::Alphabetic(case),
            Self::Chinese(_) => Self::Chinese(case),
            Self::Custom { name, .. } => Self::Custom {
                name: name.clone(),
                case,
            },
            other => other.clone(),
        }
    }

    /// Name of the custom keyboard definition, if this is a custom variant.
    #[must_use]
    pub fn custom_name(&self) -> Option<&str> {
        match self {
            Self::Custom { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_predicates() {
        assert!(KeyboardCase::Lowercased.is_lowercased());
        assert!(!KeyboardCase::Auto.is_lowercased());
        assert!(KeyboardCase::Uppercased.is_uppercased());
        assert!(KeyboardCase::CapsLocked.is_uppercased());
        assert!(!KeyboardCase::Auto.is_uppercased());
    }

    #[test]
    fn test_case_apply() {
        assert_eq!(KeyboardCase::CapsLocked.apply("q"), "Q");
        assert_eq!(KeyboardCase::Lowercased.apply("Q"), "q");
        assert_eq!(KeyboardCase::Auto.apply("Q"), "q");
    }

    #[test]
    fn test_case_from_id() {
        assert_eq!(KeyboardCase::from_id("capsLocked"), Some(KeyboardCase::CapsLocked));
        assert_eq!(KeyboardCase::from_id("CAPS"), None);
    }

    #[test]
    fn test_variant_families() {
        assert!(KeyboardVariant::ChineseNineGrid.is_chinese());
        assert!(KeyboardVariant::ChineseSymbolic.is_chinese());
        assert!(!KeyboardVariant::Numeric.is_chinese());
        assert!(KeyboardVariant::Chinese(KeyboardCase::Auto).is_chinese_primary());
        assert!(!KeyboardVariant::ChineseNumeric.is_chinese_primary());
        assert!(KeyboardVariant::NumericNineGrid.is_number());
        assert!(KeyboardVariant::ChineseSymbolic.is_symbol());
    }

    #[test]
    fn test_with_case_keeps_family() {
        let custom = KeyboardVariant::custom("t9");
        assert_eq!(
            custom.with_case(KeyboardCase::CapsLocked),
            KeyboardVariant::Custom {
                name: "t9".to_string(),
                case: KeyboardCase::CapsLocked
            }
        );
        assert_eq!(
            KeyboardVariant::Numeric.with_case(KeyboardCase::CapsLocked),
            KeyboardVariant::Numeric
        );
    }

    #[test]
    fn test_variant_ids_are_unique_per_case() {
        let lower = KeyboardVariant::Chinese(KeyboardCase::Lowercased).id();
        let upper = KeyboardVariant::Chinese(KeyboardCase::Uppercased).id();
        assert_ne!(lower, upper);
        assert_eq!(
            KeyboardVariant::ClassifySymbolic { light: true }.id(),
            "classifySymbolicOfLight"
        );
    }
}
