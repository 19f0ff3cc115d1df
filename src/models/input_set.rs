//! Character grids the layout builders start from.
//!
//! An input set holds the three input rows of a keyboard (the bottom row is
//! added by the builders). Rows may differ between phone and pad. The
//! standard English and Chinese sets are built in; hosts can supply their own
//! through [`StandardInputSetProvider::from_json_str`].

use crate::models::{DeviceType, KeyboardCase, KeyboardVariant};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One key of an input set, with its text per case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSetItem {
    /// Text when case does not matter
    pub neutral: String,
    /// Uppercased text
    pub uppercased: String,
    /// Lowercased text
    pub lowercased: String,
}

impl InputSetItem {
    /// Creates an item whose cased forms are derived from `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let neutral = text.into();
        Self {
            uppercased: neutral.to_uppercase(),
            lowercased: neutral.to_lowercase(),
            neutral,
        }
    }

    /// Text to show for a keyboard case (`auto` reads as lowercased).
    #[must_use]
    pub fn character(&self, case: KeyboardCase) -> &str {
        if case.is_uppercased() {
            &self.uppercased
        } else {
            &self.lowercased
        }
    }
}

/// One input row; `pad` falls back to `phone` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSetRow {
    /// Characters on phones
    pub phone: String,
    /// Characters on pads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<String>,
}

impl InputSetRow {
    /// Row with the same characters on every device.
    pub fn chars(chars: impl Into<String>) -> Self {
        Self {
            phone: chars.into(),
            pad: None,
        }
    }

    /// Row with device-specific characters.
    pub fn device(phone: impl Into<String>, pad: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            pad: Some(pad.into()),
        }
    }

    /// Items of this row for a device, one per character.
    #[must_use]
    pub fn items(&self, device: DeviceType) -> Vec<InputSetItem> {
        let chars = match (device, &self.pad) {
            (DeviceType::Pad, Some(pad)) => pad,
            _ => &self.phone,
        };
        chars.chars().map(|c| InputSetItem::new(c.to_string())).collect()
    }
}

/// Input rows of one keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSet {
    /// Rows from top to bottom
    pub rows: Vec<InputSetRow>,
}

impl InputSet {
    /// Creates an input set from rows.
    #[must_use]
    pub const fn new(rows: Vec<InputSetRow>) -> Self {
        Self { rows }
    }

    /// Item rows for a device.
    #[must_use]
    pub fn rows_for(&self, device: DeviceType) -> Vec<Vec<InputSetItem>> {
        self.rows.iter().map(|row| row.items(device)).collect()
    }

    /// Digit grid of the numeric nine-grid keyboard.
    #[must_use]
    pub fn numeric_nine_grid() -> Self {
        Self::new(vec![
            InputSetRow::chars("123"),
            InputSetRow::chars("456"),
            InputSetRow::chars("789"),
            InputSetRow::chars("0."),
        ])
    }
}

/// Alphabetic, numeric and symbolic input sets of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedInputSets {
    /// Letter keyboard rows
    pub alphabetic: InputSet,
    /// Numeric keyboard rows
    pub numeric: InputSet,
    /// Symbolic keyboard rows
    pub symbolic: InputSet,
}

impl LocalizedInputSets {
    /// Standard English (QWERTY) sets.
    #[must_use]
    pub fn english() -> Self {
        let currency = "$";
        let currencies = "€$¥";
        Self {
            alphabetic: InputSet::new(vec![
                InputSetRow::chars("qwertyuiop"),
                InputSetRow::chars("asdfghjkl"),
                InputSetRow::device("zxcvbnm", "zxcvbnm,."),
            ]),
            numeric: InputSet::new(vec![
                InputSetRow::chars("1234567890"),
                InputSetRow::device(
                    format!("-/:;(){currency}&@\""),
                    format!("@#{currency}&*()'\""),
                ),
                InputSetRow::device(".,?!'", "%-+=/;:!?"),
            ]),
            symbolic: InputSet::new(vec![
                InputSetRow::device("[]{}#%^*+=", "1234567890"),
                InputSetRow::device(
                    format!("_\\|~<>{currencies}•"),
                    format!("{currencies}_^[]{{}}"),
                ),
                InputSetRow::device(".,?!’", "§|~…\\<>!?"),
            ]),
        }
    }

    /// Standard Chinese sets (full-width punctuation).
    #[must_use]
    pub fn chinese() -> Self {
        Self {
            alphabetic: InputSet::new(vec![
                InputSetRow::chars("qwertyuiop"),
                InputSetRow::chars("asdfghjkl"),
                InputSetRow::device("zxcvbnm", "zxcvbnm,."),
            ]),
            numeric: InputSet::new(vec![
                InputSetRow::chars("1234567890"),
                InputSetRow::device("-/：；（）￥@“”", "@#¥/（）“”’"),
                InputSetRow::device("。，、？！.", "%-～…、；：，。"),
            ]),
            symbolic: InputSet::new(vec![
                InputSetRow::device("【】｛｝#%^*+=", "^_｜\\<>{},."),
                InputSetRow::device("_—\\｜～《》$&·", "&$€*【】「」•"),
                InputSetRow::device("…，。？！‘", "。—+=·《》！？"),
            ]),
        }
    }

    /// Input set backing a keyboard variant, if it has one.
    #[must_use]
    pub fn for_variant(&self, variant: &KeyboardVariant) -> Option<&InputSet> {
        match variant {
            KeyboardVariant::Alphabetic(_) | KeyboardVariant::Chinese(_) => Some(&self.alphabetic),
            KeyboardVariant::Numeric | KeyboardVariant::ChineseNumeric => Some(&self.numeric),
            KeyboardVariant::Symbolic | KeyboardVariant::ChineseSymbolic => Some(&self.symbolic),
            _ => None,
        }
    }
}

/// Source of the character grids builders lay out.
pub trait InputSetProvider {
    /// Input sets for the language family of `variant`.
    fn input_sets(&self, variant: &KeyboardVariant) -> &LocalizedInputSets;

    /// Cased character rows for a variant and device.
    ///
    /// Variants without an input set (nine-grids, custom keyboards, emoji)
    /// yield no rows.
    fn characters(&self, variant: &KeyboardVariant, device: DeviceType) -> Vec<Vec<String>> {
        let Some(input_set) = self.input_sets(variant).for_variant(variant) else {
            return Vec::new();
        };
        let case = variant.case();
        input_set
            .rows_for(device)
            .iter()
            .map(|row| {
                row.iter()
                    .map(|item| match case {
                        Some(case) => item.character(case).to_string(),
                        None => item.neutral.clone(),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Picks the Chinese sets for Chinese variants and English otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardInputSetProvider {
    /// Sets for Latin keyboards
    pub english: LocalizedInputSets,
    /// Sets for Chinese keyboards
    pub chinese: LocalizedInputSets,
}

impl Default for StandardInputSetProvider {
    fn default() -> Self {
        Self {
            english: LocalizedInputSets::english(),
            chinese: LocalizedInputSets::chinese(),
        }
    }
}

impl StandardInputSetProvider {
    /// Parses a provider from JSON with `english` and `chinese` sets.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse input set JSON")
    }
}

impl InputSetProvider for StandardInputSetProvider {
    fn input_sets(&self, variant: &KeyboardVariant) -> &LocalizedInputSets {
        if variant.is_chinese() {
            &self.chinese
        } else {
            &self.english
        }
    }
}
