//! Custom keyboard YAML parsing.
//!
//! # File Format
//!
//! ```yaml
//! keyboards:
//!   - name: t9
//!     row_height: 50
//!     button_insets: { top: 4, left: 3, bottom: 4, right: 3 }
//!     rows:
//!       - keys:
//!           - action: character(q)
//!             swipe:
//!               - { direction: up, action: character(1), display: true }
//!           - action: backspace
//!             width: { portrait: percentage(0.13), landscape: percentage(0.1) }
//!       - row_height: { portrait: 56, landscape: 40 }
//!         keys:
//!           - action: keyboardType(custom(symbols))
//!             width: input
//! ```
//!
//! Keys without a width take `input`. Spacer actions (`characterMargin(..)`,
//! `none`) always take `available`.

use crate::models::{
    CustomKey, CustomKeyboard, CustomKeyboards, CustomRow, Insets, KeySwipe, Oriented,
    SwipeDirection,
};
use crate::parser::expression::{parse_key_action, parse_width_unit};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawKeyboards {
    #[serde(default)]
    keyboards: Vec<RawKeyboard>,
}

#[derive(Debug, Deserialize)]
struct RawKeyboard {
    name: String,
    #[serde(default)]
    rows: Vec<RawRow>,
    #[serde(default, alias = "rowHeight")]
    row_height: Option<RawOriented<f64>>,
    #[serde(default, alias = "buttonInsets")]
    button_insets: Option<RawInsets>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    keys: Vec<RawKey>,
    #[serde(default, alias = "rowHeight")]
    row_height: Option<RawOriented<f64>>,
}

#[derive(Debug, Deserialize)]
struct RawKey {
    action: String,
    #[serde(default)]
    width: Option<RawOriented<String>>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default, alias = "processByRIME")]
    process_by_engine: Option<bool>,
    #[serde(default)]
    swipe: Vec<RawSwipe>,
}

#[derive(Debug, Deserialize)]
struct RawSwipe {
    direction: SwipeDirection,
    action: String,
    #[serde(default, alias = "processByRIME")]
    process_by_engine: bool,
    #[serde(default)]
    display: bool,
    #[serde(default)]
    label: Option<String>,
}

/// Single value or a `{ portrait, landscape }` pair.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOriented<T> {
    Uniform(T),
    Split { portrait: T, landscape: T },
}

impl<T> RawOriented<T> {
    fn try_map<U: Copy>(&self, parse: impl Fn(&T) -> Result<U>) -> Result<Oriented<U>> {
        match self {
            Self::Uniform(value) => Ok(Oriented::uniform(parse(value)?)),
            Self::Split {
                portrait,
                landscape,
            } => Ok(Oriented {
                portrait: parse(portrait)?,
                landscape: parse(landscape)?,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInsets {
    Uniform(f64),
    Edges {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        left: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        right: f64,
    },
}

impl From<RawInsets> for Insets {
    fn from(raw: RawInsets) -> Self {
        match raw {
            RawInsets::Uniform(value) => Self::uniform(value),
            RawInsets::Edges {
                top,
                left,
                bottom,
                right,
            } => Self::new(top, left, bottom, right),
        }
    }
}

/// Parses custom keyboard definitions from a YAML file.
pub fn parse_custom_keyboards(path: &Path) -> Result<CustomKeyboards> {
    if !path.is_file() {
        anyhow::bail!("Custom keyboard file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read custom keyboard file: {}", path.display()))?;

    parse_custom_keyboards_str(&content)
        .with_context(|| format!("Failed to parse custom keyboard file: {}", path.display()))
}

/// Parses custom keyboard definitions from YAML text.
///
/// The result is validated with [`CustomKeyboards::validate`].
pub fn parse_custom_keyboards_str(content: &str) -> Result<CustomKeyboards> {
    let raw: RawKeyboards =
        serde_yml::from_str(content).context("Failed to parse custom keyboard YAML")?;

    let keyboards = raw
        .keyboards
        .into_iter()
        .map(convert_keyboard)
        .collect::<Result<Vec<_>>>()?;

    let keyboards = CustomKeyboards::new(keyboards);
    keyboards.validate()?;

    tracing::debug!(count = keyboards.keyboards.len(), "parsed custom keyboards");
    Ok(keyboards)
}

fn convert_keyboard(raw: RawKeyboard) -> Result<CustomKeyboard> {
    let name = raw.name;
    let rows = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(row_index, row)| {
            convert_row(row).with_context(|| format!("Error in keyboard '{name}', row {row_index}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let row_height = raw
        .row_height
        .map(|height| height.try_map(|value| Ok(*value)))
        .transpose()?;

    Ok(CustomKeyboard {
        name,
        rows,
        row_height,
        button_insets: raw.button_insets.map(Insets::from),
    })
}

fn convert_row(raw: RawRow) -> Result<CustomRow> {
    let keys = raw
        .keys
        .into_iter()
        .enumerate()
        .map(|(key_index, key)| {
            convert_key(key).with_context(|| format!("Error in key {key_index}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let row_height = raw
        .row_height
        .map(|height| height.try_map(|value| Ok(*value)))
        .transpose()?;

    Ok(CustomRow { keys, row_height })
}

fn convert_key(raw: RawKey) -> Result<CustomKey> {
    let action = parse_key_action(&raw.action)?;
    let mut key = CustomKey::new(action);

    if !key.action.is_spacer() {
        if let Some(width) = &raw.width {
            key.width = width.try_map(|expression| parse_width_unit(expression))?;
        }
        key.label = raw.label.unwrap_or_default();
    }
    if let Some(process_by_engine) = raw.process_by_engine {
        key.process_by_engine = process_by_engine;
    }

    key.swipes = raw
        .swipe
        .into_iter()
        .map(convert_swipe)
        .collect::<Result<Vec<_>>>()?;

    Ok(key)
}

fn convert_swipe(raw: RawSwipe) -> Result<KeySwipe> {
    let action = parse_key_action(&raw.action)
        .with_context(|| format!("Invalid swipe action: {}", raw.action))?;
    Ok(KeySwipe {
        direction: raw.direction,
        action,
        process_by_engine: raw.process_by_engine,
        display: raw.display,
        label: raw.label.unwrap_or_default(),
    })
}
