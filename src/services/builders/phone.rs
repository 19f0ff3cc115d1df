//! Phone layouts for the Chinese and English keyboard families.
//!
//! # Rows
//!
//! ```text
//! top     q w e r t y u i o p
//! middle  [margin] a s d f g h j k l [;] [margin]
//! lower   switcher margin z x c v b n m margin backspace
//! bottom  switcher ... space ... return
//! ```
//!
//! Middle row margins only appear when the top row is longer.

use super::common::{
    bottom_row_switcher, input_actions, leading_margin, lower_row_switcher, return_action,
    semicolon_key, split_input_rows, trailing_margin, ItemFactory,
};
use super::Language;
use crate::config::SpaceSideButton;
use crate::models::{
    HostKeyboardType, InputSetProvider, KeyAction, KeyboardCase, KeyboardContext,
    KeyboardVariant, LayoutRow, ReturnKeyType, WidthUnit,
};

/// Row index of the input row widened on numeric and symbolic keyboards.
const WIDE_SYMBOL_ROW: usize = 2;
/// Row index of the bottom (space) row.
const BOTTOM_ROW: usize = 3;

/// Shift and backspace width.
const LOWER_SYSTEM_WIDTH: WidthUnit = WidthUnit::Percentage(0.13);

/// Builds the rows of a phone keyboard.
pub(crate) fn build_rows(
    context: &KeyboardContext,
    input_sets: &impl InputSetProvider,
    language: Language,
) -> Vec<LayoutRow> {
    let characters = input_sets.characters(&context.keyboard_type, context.device_type);
    let actions = input_actions(&context.keyboard_type, characters);
    let rows = action_rows(context, actions, language);

    ItemFactory::new(context).rows(&rows, |action, position| {
        item_width(context, language, action, position.row, position.keys)
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

    let middle_margins = top.len() > middle.len();
    let mut middle_row = Vec::with_capacity(middle.len() + 3);
    if middle_margins {
        middle_row.push(leading_margin(&middle));
    }
    let middle_trailing = trailing_margin(&middle);
    middle_row.extend(middle);
    if language == Language::Chinese {
        middle_row.extend(semicolon_key(context));
    }
    if middle_margins {
        middle_row.push(middle_trailing);
    }

    let mut lower_row = Vec::with_capacity(lower.len() + 4);
    if let Some(switcher) = lower_row_switcher(context) {
        lower_row.push(switcher);
        lower_row.push(leading_margin(&lower));
    }
    let lower_trailing = trailing_margin(&lower);
    lower_row.extend(lower);
    lower_row.push(lower_trailing);
    lower_row.push(KeyAction::Backspace);

    let bottom_row = match language {
        Language::English => english_bottom_row(context),
        Language::Chinese => chinese_bottom_row(context),
    };

    vec![top, middle_row, lower_row, bottom_row]
}

fn english_bottom_row(context: &KeyboardContext) -> Vec<KeyAction> {
    let mut row = Vec::new();
    row.extend(bottom_row_switcher(context));

    let language_switch = context
        .keyboard_type
        .is_alphabetic()
        .then(|| KeyAction::KeyboardType(KeyboardVariant::Chinese(KeyboardCase::Lowercased)));
    let switch_on_left = context.settings.chinese_english_switch_on_left_of_space;

    if switch_on_left {
        row.extend(language_switch.clone());
    }
    if context.needs_input_mode_switch_key {
        row.push(KeyAction::NextKeyboard);
    }
    row.push(KeyAction::Space);
    if !switch_on_left {
        row.extend(language_switch);
    }
    if context.host_keyboard_type == HostKeyboardType::EmailAddress {
        row.push(KeyAction::symbol("@"));
        row.push(KeyAction::symbol("."));
    }
    if context.return_key_type == Some(ReturnKeyType::Go) {
        row.push(KeyAction::symbol("."));
    }
    row.push(return_action(context));
    row
}

fn chinese_bottom_row(context: &KeyboardContext) -> Vec<KeyAction> {
    let settings = &context.settings;
    let mut row = Vec::new();
    row.extend(bottom_row_switcher(context));

    if context.needs_input_mode_switch_key {
        row.push(KeyAction::NextKeyboard);
    }
    if settings.display_classify_symbol_button {
        row.push(KeyAction::KeyboardType(KeyboardVariant::ClassifySymbolic {
            light: false,
        }));
    }

    let language_switch = (context.keyboard_type.is_chinese_primary()
        && settings.display_chinese_english_switch_button)
        .then(|| KeyAction::KeyboardType(KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)));
    let switch_on_left = settings.chinese_english_switch_on_left_of_space;

    if switch_on_left {
        row.extend(language_switch.clone());
    }
    row.extend(settings.space_left_button.as_ref().map(space_side_key));
    row.push(KeyAction::Space);
    row.extend(settings.space_right_button.as_ref().map(space_side_key));
    if !switch_on_left {
        row.extend(language_switch);
    }
    row.push(return_action(context));
    row
}

fn space_side_key(button: &SpaceSideButton) -> KeyAction {
    if button.process_by_engine {
        KeyAction::Character(button.value.clone())
    } else {
        KeyAction::Symbol(button.value.clone())
    }
}

fn item_width(
    context: &KeyboardContext,
    language: Language,
    action: &KeyAction,
    row_index: usize,
    row: &[KeyAction],
) -> WidthUnit {
    let is_bottom = row_index == BOTTOM_ROW;
    match action {
        KeyAction::Character(_) | KeyAction::Symbol(_) => {
            if row_index == WIDE_SYMBOL_ROW && context.keyboard_type.has_wide_symbol_row() {
                wide_symbol_width(language)
            } else {
                WidthUnit::Input
            }
        }
        KeyAction::Backspace | KeyAction::Shift(_) => LOWER_SYSTEM_WIDTH,
        KeyAction::KeyboardType(target) => {
            if is_bottom && row.len() == 3 {
                large_bottom_width(context)
            } else if is_bottom && row.len() == 4 && target.is_number() {
                small_bottom_width(context)
            } else {
                bottom_system_width(context)
            }
        }
        KeyAction::NextKeyboard | KeyAction::ReturnLastKeyboard => bottom_system_width(context),
        KeyAction::Primary(_) => {
            if is_bottom && row.len() == 3 {
                large_bottom_width(context)
            } else {
                small_bottom_width(context)
            }
        }
        _ => WidthUnit::Available,
    }
}

const fn wide_symbol_width(language: Language) -> WidthUnit {
    match language {
        Language::English => WidthUnit::Percentage(0.14),
        Language::Chinese => WidthUnit::Percentage(0.115),
    }
}

/// Switcher and return width in a three-key bottom row.
fn large_bottom_width(context: &KeyboardContext) -> WidthUnit {
    WidthUnit::Percentage(if context.is_portrait() { 0.25 } else { 0.195 })
}

/// Return width once the bottom row has more keys.
fn small_bottom_width(context: &KeyboardContext) -> WidthUnit {
    WidthUnit::Percentage(if context.is_portrait() { 0.19 } else { 0.135 })
}

/// Width of the remaining bottom row system keys.
fn bottom_system_width(context: &KeyboardContext) -> WidthUnit {
    WidthUnit::Percentage(if context.is_portrait() { 0.123 } else { 0.095 })
}
