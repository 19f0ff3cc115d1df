//! Pad layouts.
//!
//! Pads carry more system keys than phones: tab and backspace frame the top
//! row, the middle row ends in the return key, and the lower row has a
//! switcher on both sides. Nearly every key is `Input` wide; the return key
//! and the lower-row shift take up what is left.

use super::common::{
    bottom_row_switcher, input_actions, lower_row_switcher, return_action, semicolon_key,
    split_input_rows, ItemFactory,
};
use super::Language;
use crate::models::{
    InputSetProvider, KeyAction, KeyboardCase, KeyboardContext, KeyboardVariant, LayoutRow,
    WidthUnit,
};

/// Builds the rows of a pad keyboard.
pub(crate) fn build_rows(
    context: &KeyboardContext,
    input_sets: &impl InputSetProvider,
    language: Language,
) -> Vec<LayoutRow> {
    let characters = input_sets.characters(&context.keyboard_type, context.device_type);
    let actions = input_actions(&context.keyboard_type, characters);
    let rows = action_rows(context, actions, language);

    ItemFactory::new(context).rows(&rows, |action, position| {
        item_width(action, position.row, position.index)
    })
}

fn action_rows(
    context: &KeyboardContext,
    actions: Vec<Vec<KeyAction>>,
    language: Language,
) -> Vec<Vec<KeyAction>> {
    let [top, middle, lower] = match split_input_rows(actions) {
        Ok(rows) => rows,
        Err(rows) => return rows,
    };

    let mut top_row = vec![KeyAction::Tab];
    top_row.extend(top);
    top_row.push(KeyAction::Backspace);

    let mut middle_row = vec![language_switch(language)];
    middle_row.extend(middle);
    if language == Language::Chinese {
        middle_row.extend(semicolon_key(context));
    }
    middle_row.push(return_action(context));

    let switcher = lower_row_switcher(context);
    let mut lower_row = Vec::new();
    lower_row.extend(switcher.clone());
    lower_row.extend(lower);
    lower_row.extend(switcher);

    let bottom_switcher = bottom_row_switcher(context);
    let mut bottom_row = vec![KeyAction::NextKeyboard];
    bottom_row.extend(bottom_switcher.clone());
    bottom_row.push(KeyAction::KeyboardType(KeyboardVariant::ClassifySymbolic {
        light: false,
    }));
    bottom_row.push(KeyAction::Space);
    bottom_row.extend(bottom_switcher);
    bottom_row.push(KeyAction::DismissKeyboard);

    vec![top_row, middle_row, lower_row, bottom_row]
}

/// Middle row key switching to the other language.
const fn language_switch(language: Language) -> KeyAction {
    match language {
        Language::Chinese => {
            KeyAction::KeyboardType(KeyboardVariant::Alphabetic(KeyboardCase::Lowercased))
        }
        Language::English => {
            KeyAction::KeyboardType(KeyboardVariant::Chinese(KeyboardCase::Lowercased))
        }
    }
}

fn item_width(action: &KeyAction, row_index: usize, index: usize) -> WidthUnit {
    let is_switcher = matches!(action, KeyAction::Shift(_) | KeyAction::KeyboardType(_));
    let available = match row_index {
        1 => matches!(action, KeyAction::Primary(_) | KeyAction::KeyboardType(_)),
        2 => matches!(action, KeyAction::Shift(_)) || (is_switcher && index > 0),
        _ => false,
    };

    if available {
        WidthUnit::Available
    } else if action.is_system_action() || action.is_input_action() {
        WidthUnit::Input
    } else {
        WidthUnit::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceType, ReturnKeyType, StandardInputSetProvider};

    fn build(variant: KeyboardVariant, language: Language) -> Vec<LayoutRow> {
        let context = KeyboardContext::new(DeviceType::Pad, variant);
        build_rows(&context, &StandardInputSetProvider::default(), language)
    }

    #[test]
    fn test_pad_chinese_rows() {
        let rows = build(KeyboardVariant::default(), Language::Chinese);
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].first().map(|item| &item.action), Some(&KeyAction::Tab));
        assert_eq!(rows[0].last().map(|item| &item.action), Some(&KeyAction::Backspace));
        assert!(rows[0].iter().all(|item| item.width == WidthUnit::Input));

        let middle = &rows[1];
        assert_eq!(
            middle[0].action,
            KeyAction::KeyboardType(KeyboardVariant::Alphabetic(KeyboardCase::Lowercased))
        );
        assert_eq!(middle[0].width, WidthUnit::Available);
        let return_key = middle.last().unwrap();
        assert_eq!(return_key.action, KeyAction::Primary(ReturnKeyType::NewLine));
        assert_eq!(return_key.width, WidthUnit::Available);

        let lower = &rows[2];
        assert_eq!(lower[0].action, KeyAction::Shift(KeyboardCase::Lowercased));
        assert_eq!(lower[0].width, WidthUnit::Available);
        assert_eq!(lower.last().unwrap().width, WidthUnit::Available);
        // pad lower row carries punctuation
        assert_eq!(lower.len(), 11);
    }

    #[test]
    fn test_pad_bottom_row() {
        let rows = build(KeyboardVariant::default(), Language::Chinese);
        let bottom: Vec<_> = rows[3].iter().map(|item| item.action.clone()).collect();
        assert_eq!(
            bottom,
            vec![
                KeyAction::NextKeyboard,
                KeyAction::KeyboardType(KeyboardVariant::ChineseNumeric),
                KeyAction::KeyboardType(KeyboardVariant::ClassifySymbolic { light: false }),
                KeyAction::Space,
                KeyAction::KeyboardType(KeyboardVariant::ChineseNumeric),
                KeyAction::DismissKeyboard,
            ]
        );
        assert_eq!(rows[3][0].width, WidthUnit::Input);
        assert_eq!(rows[3][3].width, WidthUnit::Available);
    }

    #[test]
    fn test_pad_english_switches_to_chinese() {
        let rows = build(
            KeyboardVariant::Alphabetic(KeyboardCase::Lowercased),
            Language::English,
        );
        assert_eq!(
            rows[1][0].action,
            KeyAction::KeyboardType(KeyboardVariant::Chinese(KeyboardCase::Lowercased))
        );
        assert_eq!(
            rows[3][1].action,
            KeyAction::KeyboardType(KeyboardVariant::Numeric)
        );
    }

    #[test]
    fn test_pad_numeric_lower_switchers() {
        let rows = build(KeyboardVariant::Numeric, Language::English);
        let lower = &rows[2];
        assert_eq!(lower[0].action, KeyAction::KeyboardType(KeyboardVariant::Symbolic));
        assert_eq!(lower[0].width, WidthUnit::Input);
        assert_eq!(lower.last().unwrap().width, WidthUnit::Available);
    }
}
