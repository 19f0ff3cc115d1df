//! Layout builders.
//!
//! Every keyboard family has one builder turning a [`KeyboardContext`] into
//! layout rows. Builders are selected through the closed [`BuilderKind`]
//! enum; [`crate::services::LayoutRouter`] decides which one applies.

mod common;
mod custom;
mod nine_grid;
mod pad;
mod phone;

pub use nine_grid::{NineGridSideColumn, NINE_GRID_INSETS};

use crate::models::{CustomKeyboards, InputSetProvider, KeyboardContext, LayoutRow};

/// Language family of a standard keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Latin letters
    English,
    /// Pinyin letters with Chinese punctuation
    Chinese,
}

/// One builder per keyboard family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    /// User-authored keyboard definition
    Custom,
    /// T9-style Chinese keyboard
    ChineseNineGrid,
    /// T9-style digit keyboard
    NumericNineGrid,
    /// Chinese keyboard on a pad
    PadChinese,
    /// English keyboard on a pad
    PadAlphabetic,
    /// Chinese keyboard on a phone
    PhoneChinese,
    /// English keyboard on a phone
    PhoneAlphabetic,
}

impl BuilderKind {
    /// Stable name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::ChineseNineGrid => "chinese_nine_grid",
            Self::NumericNineGrid => "numeric_nine_grid",
            Self::PadChinese => "pad_chinese",
            Self::PadAlphabetic => "pad_alphabetic",
            Self::PhoneChinese => "phone_chinese",
            Self::PhoneAlphabetic => "phone_alphabetic",
        }
    }

    /// Language family of the standard builders.
    #[must_use]
    pub const fn language(self) -> Option<Language> {
        match self {
            Self::PadChinese | Self::PhoneChinese => Some(Language::Chinese),
            Self::PadAlphabetic | Self::PhoneAlphabetic => Some(Language::English),
            Self::Custom | Self::ChineseNineGrid | Self::NumericNineGrid => None,
        }
    }

    /// Builds the rows for `context`.
    ///
    /// # Panics
    ///
    /// [`BuilderKind::Custom`] panics when the active custom keyboard is not
    /// in `custom_keyboards`.
    #[must_use]
    pub fn build_rows(
        self,
        context: &KeyboardContext,
        input_sets: &impl InputSetProvider,
        custom_keyboards: &CustomKeyboards,
    ) -> Vec<LayoutRow> {
        match self {
            Self::Custom => custom::build_rows(context, custom_keyboards),
            Self::ChineseNineGrid => nine_grid::build_chinese_rows(context),
            Self::NumericNineGrid => nine_grid::build_numeric_rows(context),
            Self::PadChinese => pad::build_rows(context, input_sets, Language::Chinese),
            Self::PadAlphabetic => pad::build_rows(context, input_sets, Language::English),
            Self::PhoneChinese => phone::build_rows(context, input_sets, Language::Chinese),
            Self::PhoneAlphabetic => phone::build_rows(context, input_sets, Language::English),
        }
    }
}

impl std::fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_language() {
        assert_eq!(BuilderKind::PadChinese.language(), Some(Language::Chinese));
        assert_eq!(BuilderKind::PhoneAlphabetic.language(), Some(Language::English));
        assert_eq!(BuilderKind::Custom.language(), None);
    }

    #[test]
    fn test_builder_display() {
        assert_eq!(BuilderKind::NumericNineGrid.to_string(), "numeric_nine_grid");
    }
}
