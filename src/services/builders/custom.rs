//! Layouts from user-authored custom keyboard definitions.

use super::common::{return_action, ItemFactory};
use crate::models::{
    CustomKey, CustomKeyboards, Insets, KeyAction, KeyboardCase, KeyboardContext, LayoutItem,
    LayoutRow,
};

/// Builds the rows of the custom keyboard named by the context's variant.
///
/// # Panics
///
/// Panics when the active variant names a keyboard missing from
/// `keyboards`. Definitions are expected to pass
/// [`CustomKeyboards::validate`] before they reach a session.
pub(crate) fn build_rows(context: &KeyboardContext, keyboards: &CustomKeyboards) -> Vec<LayoutRow> {
    let name = context.keyboard_type.custom_name().unwrap_or_default();
    let Some(keyboard) = keyboards.get(name) else {
        tracing::error!(name, "custom keyboard not found");
        panic!("custom keyboard not found: {name}");
    };

    let case = context
        .keyboard_type
        .case()
        .unwrap_or(KeyboardCase::Lowercased);
    let factory = ItemFactory::new(context);
    let configuration = context.layout_configuration();
    let insets = keyboard.button_insets.unwrap_or(configuration.button_insets);

    keyboard
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let height = keyboard
                .row_height(row_index, context.orientation)
                .unwrap_or(configuration.row_height);
            row.keys
                .iter()
                .map(|key| build_item(context, &factory, key, case, height, insets))
                .collect()
        })
        .collect()
}

fn build_item(
    context: &KeyboardContext,
    factory: &ItemFactory<'_>,
    key: &CustomKey,
    case: KeyboardCase,
    height: f64,
    insets: Insets,
) -> LayoutItem {
    let action = cased_action(context, &key.action, case);
    let insets = if action.is_spacer() { Insets::ZERO } else { insets };
    let width = key.width.get(context.orientation);

    let mut item = factory.item_with(action, width, height, insets);
    // definition swipes come first, table bindings follow
    let mut swipes = key.swipes.clone();
    swipes.append(&mut item.swipes);
    item.swipes = swipes;
    item
}

/// Applies the keyboard case and binds primary keys to the host return key.
fn cased_action(context: &KeyboardContext, action: &KeyAction, case: KeyboardCase) -> KeyAction {
    match action {
        KeyAction::Character(text) => KeyAction::Character(case.apply(text)),
        KeyAction::CharacterMargin(text) => KeyAction::CharacterMargin(case.apply(text)),
        KeyAction::Shift(_) => KeyAction::Shift(case),
        KeyAction::Primary(_) => return_action(context),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CustomKeyboard, CustomRow, DeviceType, KeySwipe, KeyboardVariant, Orientation, Oriented,
        ReturnKeyType, SwipeDirection, WidthUnit,
    };

    fn keyboards() -> CustomKeyboards {
        let mut letter = CustomKey::new(KeyAction::character("q"));
        letter.swipes = vec![KeySwipe::new(SwipeDirection::Up, KeyAction::character("1"))];
        let mut backspace = CustomKey::new(KeyAction::Backspace);
        backspace.width = Oriented {
            portrait: WidthUnit::Percentage(0.13),
            landscape: WidthUnit::Percentage(0.1),
        };
        let mut margin = CustomKey::new(KeyAction::CharacterMargin("a".to_string()));
        margin.width = Oriented::uniform(WidthUnit::Available);

        CustomKeyboards::new(vec![CustomKeyboard {
            name: "t9".to_string(),
            rows: vec![
                CustomRow {
                    keys: vec![letter, backspace],
                    row_height: Some(Oriented::uniform(60.0)),
                },
                CustomRow {
                    keys: vec![
                        margin,
                        CustomKey::new(KeyAction::Shift(KeyboardCase::Lowercased)),
                        CustomKey::new(KeyAction::Primary(ReturnKeyType::Return)),
                    ],
                    row_height: None,
                },
            ],
            row_height: None,
            button_insets: Some(Insets::uniform(2.0)),
        }])
    }

    fn context(case: KeyboardCase) -> KeyboardContext {
        let variant = KeyboardVariant::custom("t9").with_case(case);
        KeyboardContext::new(DeviceType::Phone, variant).with_return_key_type(ReturnKeyType::Send)
    }

    #[test]
    fn test_custom_rows() {
        let context = context(KeyboardCase::Lowercased);
        let rows = build_rows(&context, &keyboards());
        assert_eq!(rows.len(), 2);

        let letter = &rows[0][0];
        assert_eq!(letter.action, KeyAction::character("q"));
        assert_eq!(letter.width, WidthUnit::Input);
        assert_eq!(letter.height, 60.0);
        assert_eq!(letter.insets, Insets::uniform(2.0));
        assert_eq!(letter.swipes.len(), 1);

        assert_eq!(rows[0][1].width, WidthUnit::Percentage(0.13));
        assert_eq!(rows[1][0].insets, Insets::ZERO);
        assert_eq!(rows[1][0].height, context.layout_configuration().row_height);
        assert_eq!(rows[1][2].action, KeyAction::Primary(ReturnKeyType::Send));
    }

    #[test]
    fn test_custom_rows_apply_case() {
        let rows = build_rows(&context(KeyboardCase::Uppercased), &keyboards());
        assert_eq!(rows[0][0].action, KeyAction::character("Q"));
        assert_eq!(rows[1][0].action, KeyAction::CharacterMargin("A".to_string()));
        assert_eq!(rows[1][1].action, KeyAction::Shift(KeyboardCase::Uppercased));
    }

    #[test]
    fn test_custom_rows_landscape_width() {
        let context = context(KeyboardCase::Lowercased).with_orientation(Orientation::Landscape);
        let rows = build_rows(&context, &keyboards());
        assert_eq!(rows[0][1].width, WidthUnit::Percentage(0.1));
    }

    #[test]
    #[should_panic(expected = "custom keyboard not found")]
    fn test_missing_custom_keyboard_panics() {
        let context = KeyboardContext::new(DeviceType::Phone, KeyboardVariant::custom("nowhere"));
        let _ = build_rows(&context, &keyboards());
    }
}
