//! Attribute expressions used in custom keyboard definitions.
//!
//! # Syntax
//!
//! ```text
//! name            shift, space, input
//! name(value)     character(q), percentage(0.13)
//! name(inner(v))  keyboardType(custom(symbols))
//! ```
//!
//! Only the outermost parentheses are split; nested values are parsed by the
//! caller. Names are matched case-insensitively.

use crate::models::{KeyAction, KeyboardCase, KeyboardVariant, ReturnKeyType, WidthUnit};
use anyhow::{Context, Result};
use regex::Regex;

/// Splits an expression into its name and (possibly empty) value.
pub fn parse_attribute(expression: &str) -> Result<(String, String)> {
    let attribute_regex = Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_]*)\s*(?:\((.*)\))?\s*$")
        .context("Failed to compile attribute pattern")?;

    let captures = attribute_regex
        .captures(expression)
        .ok_or_else(|| anyhow::anyhow!("Invalid attribute expression: {expression}"))?;

    let name = captures[1].to_string();
    let value = captures
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    Ok((name, value))
}

/// Parses a keyboard variant expression, e.g. `numeric` or `custom(symbols)`.
pub fn parse_keyboard_type(expression: &str) -> Result<KeyboardVariant> {
    let (name, value) = parse_attribute(expression)?;
    let variant = match name.to_lowercase().as_str() {
        "alphabetic" => KeyboardVariant::Alphabetic(KeyboardCase::Lowercased),
        "chinese" => KeyboardVariant::Chinese(KeyboardCase::Lowercased),
        "numeric" => KeyboardVariant::Numeric,
        "symbolic" => KeyboardVariant::Symbolic,
        "chinesenumeric" => KeyboardVariant::ChineseNumeric,
        "chinesesymbolic" => KeyboardVariant::ChineseSymbolic,
        "classifysymbolic" => KeyboardVariant::ClassifySymbolic { light: false },
        "chineseninegrid" => KeyboardVariant::ChineseNineGrid,
        "numericninegrid" => KeyboardVariant::NumericNineGrid,
        "emojis" => KeyboardVariant::Emojis,
        "custom" => {
            if value.is_empty() {
                anyhow::bail!("Custom keyboard type needs a name: {expression}");
            }
            KeyboardVariant::custom(value)
        }
        _ => anyhow::bail!("Unknown keyboard type: {expression}"),
    };
    Ok(variant)
}

/// Parses a key action expression, e.g. `character(q)` or `backspace`.
pub fn parse_key_action(expression: &str) -> Result<KeyAction> {
    let (name, value) = parse_attribute(expression)?;
    let require_value = |kind: &str| -> Result<String> {
        if value.is_empty() {
            anyhow::bail!("Action '{kind}' needs a value: {expression}");
        }
        Ok(value.clone())
    };

    let action = match name.to_lowercase().as_str() {
        "backspace" => KeyAction::Backspace,
        "return" => KeyAction::Primary(ReturnKeyType::Return),
        "shift" => KeyAction::Shift(KeyboardCase::Lowercased),
        "space" => KeyAction::Space,
        "tab" => KeyAction::Tab,
        "nextkeyboard" => KeyAction::NextKeyboard,
        "dismisskeyboard" => KeyAction::DismissKeyboard,
        "none" => KeyAction::None,
        "character" => KeyAction::Character(require_value("character")?),
        "charactermargin" => KeyAction::CharacterMargin(require_value("characterMargin")?),
        "symbol" => KeyAction::Symbol(require_value("symbol")?),
        "keyboardtype" => {
            let target = require_value("keyboardType")?;
            KeyAction::KeyboardType(
                parse_keyboard_type(&target)
                    .with_context(|| format!("Invalid keyboard type in: {expression}"))?,
            )
        }
        _ => anyhow::bail!("Unknown key action: {expression}"),
    };
    Ok(action)
}

/// Parses a width expression, e.g. `input` or `percentage(0.13)`.
pub fn parse_width_unit(expression: &str) -> Result<WidthUnit> {
    let (name, value) = parse_attribute(expression)?;
    let number = || -> Result<f64> {
        let number: f64 = value
            .parse()
            .with_context(|| format!("Invalid width value: {expression}"))?;
        if !number.is_finite() {
            anyhow::bail!("Width value must be finite: {expression}");
        }
        Ok(number)
    };

    let width = match name.to_lowercase().as_str() {
        "available" => WidthUnit::Available,
        "input" => WidthUnit::Input,
        "inputpercentage" => WidthUnit::InputPercentage(number()?),
        "percentage" => WidthUnit::Percentage(number()?),
        "points" => WidthUnit::Points(number()?),
        _ => anyhow::bail!("Unknown width: {expression}"),
    };
    Ok(width)
}
