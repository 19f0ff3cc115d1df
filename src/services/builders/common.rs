//! Item construction shared by every builder.

use crate::models::{
    DeviceType, Insets, KeyAction, KeyboardCase, KeyboardContext, KeyboardVariant,
    LayoutConfiguration, LayoutItem, LayoutRow, ReturnKeyType, WidthUnit,
};

/// Number of input rows a standard keyboard has above its bottom row.
pub(crate) const EXPECTED_INPUT_ROWS: usize = 3;

/// Where an action sits in the action grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyPosition<'a> {
    /// Row index
    pub(crate) row: usize,
    /// Index within the row
    pub(crate) index: usize,
    /// Every action of the row
    pub(crate) keys: &'a [KeyAction],
}

/// Turns actions into items with the context's geometry and swipe bindings.
pub(crate) struct ItemFactory<'a> {
    context: &'a KeyboardContext,
    configuration: LayoutConfiguration,
}

impl<'a> ItemFactory<'a> {
    pub(crate) fn new(context: &'a KeyboardContext) -> Self {
        Self {
            context,
            configuration: context.layout_configuration(),
        }
    }

    /// Item with the standard height and insets (zero insets for spacers).
    pub(crate) fn item(&self, action: KeyAction, width: WidthUnit) -> LayoutItem {
        let insets = if action.is_spacer() {
            Insets::ZERO
        } else {
            self.configuration.button_insets
        };
        self.item_with(action, width, self.configuration.row_height, insets)
    }

    /// Item with explicit height and insets.
    pub(crate) fn item_with(
        &self,
        action: KeyAction,
        width: WidthUnit,
        height: f64,
        insets: Insets,
    ) -> LayoutItem {
        let swipes = self
            .context
            .swipes
            .swipes_for(&self.context.keyboard_type, &action)
            .to_vec();
        LayoutItem::new(action, width, height, insets).with_swipes(swipes)
    }

    /// Maps every action of every row through `width`.
    pub(crate) fn rows(
        &self,
        action_rows: &[Vec<KeyAction>],
        width: impl Fn(&KeyAction, KeyPosition<'_>) -> WidthUnit,
    ) -> Vec<LayoutRow> {
        action_rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                row.iter()
                    .enumerate()
                    .map(|(index, action)| {
                        let position = KeyPosition {
                            row: row_index,
                            index,
                            keys: row,
                        };
                        self.item(action.clone(), width(action, position))
                    })
                    .collect()
            })
            .collect()
    }
}

/// Terminal action of the bottom row.
///
/// Uses the host's return key type, `Return` when undeclared. Pads turn a
/// plain return into a soft new line.
pub(crate) fn return_action(context: &KeyboardContext) -> KeyAction {
    let return_type = context
        .return_key_type
        .clone()
        .unwrap_or(ReturnKeyType::Return);
    match (context.device_type, return_type) {
        (DeviceType::Pad, ReturnKeyType::Return) => KeyAction::Primary(ReturnKeyType::NewLine),
        (_, return_type) => KeyAction::Primary(return_type),
    }
}

/// Actions for an input grid: symbols on numeric and symbolic keyboards,
/// characters everywhere else.
pub(crate) fn input_actions(
    variant: &KeyboardVariant,
    characters: Vec<Vec<String>>,
) -> Vec<Vec<KeyAction>> {
    let as_symbols = variant.has_wide_symbol_row();
    characters
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|text| {
                    if as_symbols {
                        KeyAction::Symbol(text)
                    } else {
                        KeyAction::Character(text)
                    }
                })
                .collect()
        })
        .collect()
}

/// Margin filler copying the first input key of a row.
pub(crate) fn leading_margin(row: &[KeyAction]) -> KeyAction {
    margin_for(row.iter().find(|action| action.is_input_action()))
}

/// Margin filler copying the last input key of a row.
pub(crate) fn trailing_margin(row: &[KeyAction]) -> KeyAction {
    margin_for(row.iter().rev().find(|action| action.is_input_action()))
}

/// Characters get a `CharacterMargin`, anything else an empty spacer.
fn margin_for(action: Option<&KeyAction>) -> KeyAction {
    match action {
        Some(KeyAction::Character(text)) => KeyAction::CharacterMargin(text.clone()),
        _ => KeyAction::None,
    }
}

/// Semicolon key appended to the middle row when enabled.
pub(crate) fn semicolon_key(context: &KeyboardContext) -> Option<KeyAction> {
    context
        .settings
        .display_semicolon_button
        .then(|| KeyAction::character(";"))
}

/// Splits an input grid into its top, middle and lower rows.
///
/// Any other shape is handed back untouched so the caller can pass it through.
pub(crate) fn split_input_rows(
    action_rows: Vec<Vec<KeyAction>>,
) -> Result<[Vec<KeyAction>; EXPECTED_INPUT_ROWS], Vec<Vec<KeyAction>>> {
    <[Vec<KeyAction>; EXPECTED_INPUT_ROWS]>::try_from(action_rows).inspect_err(|rows| {
        tracing::warn!(
            rows = rows.len(),
            expected = EXPECTED_INPUT_ROWS,
            "unexpected input row count, passing rows through"
        );
    })
}

/// Switcher placed on the lower input row.
///
/// Letter keyboards get shift; numeric and symbolic keyboards get the key
/// that flips between them.
pub(crate) fn lower_row_switcher(context: &KeyboardContext) -> Option<KeyAction> {
    let settings = &context.settings;
    let symbolic = |fallback: KeyboardVariant| {
        if settings.enable_classify_symbolic_keyboard {
            KeyboardVariant::ClassifySymbolic { light: false }
        } else {
            fallback
        }
    };
    let numeric = |fallback: KeyboardVariant| {
        if settings.enable_nine_grid_of_numeric_keyboard {
            KeyboardVariant::NumericNineGrid
        } else {
            fallback
        }
    };

    let target = match &context.keyboard_type {
        KeyboardVariant::Alphabetic(case) | KeyboardVariant::Chinese(case) => {
            return Some(KeyAction::Shift(*case));
        }
        KeyboardVariant::Numeric => symbolic(KeyboardVariant::Symbolic),
        KeyboardVariant::ChineseNumeric => symbolic(KeyboardVariant::ChineseSymbolic),
        KeyboardVariant::Symbolic => numeric(KeyboardVariant::Numeric),
        KeyboardVariant::ChineseSymbolic => numeric(KeyboardVariant::ChineseNumeric),
        _ => return None,
    };
    Some(KeyAction::KeyboardType(target))
}

/// Switcher placed at the start of the bottom row.
///
/// Letter keyboards switch to their numbers; numeric and symbolic keyboards
/// switch back to letters.
pub(crate) fn bottom_row_switcher(context: &KeyboardContext) -> Option<KeyAction> {
    let numeric = |fallback: KeyboardVariant| {
        if context.settings.enable_nine_grid_of_numeric_keyboard {
            KeyboardVariant::NumericNineGrid
        } else {
            fallback
        }
    };

    let target = match &context.keyboard_type {
        KeyboardVariant::Chinese(_) => numeric(KeyboardVariant::ChineseNumeric),
        KeyboardVariant::Alphabetic(_) => numeric(KeyboardVariant::Numeric),
        KeyboardVariant::Numeric | KeyboardVariant::Symbolic => {
            KeyboardVariant::Alphabetic(KeyboardCase::Auto)
        }
        KeyboardVariant::ChineseNumeric | KeyboardVariant::ChineseSymbolic => {
            KeyboardVariant::Chinese(KeyboardCase::Lowercased)
        }
        _ => return None,
    };
    Some(KeyAction::KeyboardType(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeySwipe, SwipeDirection};

    #[test]
    fn test_return_action() {
        let phone = KeyboardContext::new(DeviceType::Phone, KeyboardVariant::default());
        assert_eq!(return_action(&phone), KeyAction::Primary(ReturnKeyType::Return));

        let pad = KeyboardContext::new(DeviceType::Pad, KeyboardVariant::default());
        assert_eq!(return_action(&pad), KeyAction::Primary(ReturnKeyType::NewLine));

        let pad = pad.with_return_key_type(ReturnKeyType::Search);
        assert_eq!(return_action(&pad), KeyAction::Primary(ReturnKeyType::Search));
    }

    #[test]
    fn test_input_actions_per_family() {
        let grid = vec![vec!["1".to_string()]];
        assert_eq!(
            input_actions(&KeyboardVariant::Numeric, grid.clone()),
            vec![vec![KeyAction::symbol("1")]]
        );
        assert_eq!(
            input_actions(&KeyboardVariant::Alphabetic(KeyboardCase::Lowercased), grid),
            vec![vec![KeyAction::character("1")]]
        );
    }

    #[test]
    fn test_margins() {
        let row = vec![
            KeyAction::Space,
            KeyAction::character("a"),
            KeyAction::character("l"),
        ];
        assert_eq!(leading_margin(&row), KeyAction::CharacterMargin("a".to_string()));
        assert_eq!(trailing_margin(&row), KeyAction::CharacterMargin("l".to_string()));
        assert_eq!(leading_margin(&[KeyAction::symbol(".")]), KeyAction::None);
        assert_eq!(trailing_margin(&[]), KeyAction::None);
    }

    #[test]
    fn test_split_input_rows() {
        let rows = vec![vec![KeyAction::Space]; 3];
        assert!(split_input_rows(rows).is_ok());

        let rows = vec![vec![KeyAction::Space]; 2];
        assert_eq!(split_input_rows(rows.clone()), Err(rows));
    }

    #[test]
    fn test_lower_row_switcher() {
        let mut context = KeyboardContext::new(
            DeviceType::Phone,
            KeyboardVariant::Alphabetic(KeyboardCase::Uppercased),
        );
        assert_eq!(
            lower_row_switcher(&context),
            Some(KeyAction::Shift(KeyboardCase::Uppercased))
        );

        context.keyboard_type = KeyboardVariant::ChineseNumeric;
        assert_eq!(
            lower_row_switcher(&context),
            Some(KeyAction::KeyboardType(KeyboardVariant::ChineseSymbolic))
        );
        context.settings.enable_classify_symbolic_keyboard = true;
        assert_eq!(
            lower_row_switcher(&context),
            Some(KeyAction::KeyboardType(KeyboardVariant::ClassifySymbolic { light: false }))
        );

        context.keyboard_type = KeyboardVariant::Symbolic;
        context.settings.enable_nine_grid_of_numeric_keyboard = true;
        assert_eq!(
            lower_row_switcher(&context),
            Some(KeyAction::KeyboardType(KeyboardVariant::NumericNineGrid))
        );

        context.keyboard_type = KeyboardVariant::Emojis;
        assert_eq!(lower_row_switcher(&context), None);
    }

    #[test]
    fn test_bottom_row_switcher() {
        let mut context = KeyboardContext::new(DeviceType::Phone, KeyboardVariant::default());
        assert_eq!(
            bottom_row_switcher(&context),
            Some(KeyAction::KeyboardType(KeyboardVariant::ChineseNumeric))
        );

        context.keyboard_type = KeyboardVariant::Symbolic;
        assert_eq!(
            bottom_row_switcher(&context),
            Some(KeyAction::KeyboardType(KeyboardVariant::Alphabetic(KeyboardCase::Auto)))
        );

        context.keyboard_type = KeyboardVariant::Alphabetic(KeyboardCase::Lowercased);
        context.settings.enable_nine_grid_of_numeric_keyboard = true;
        assert_eq!(
            bottom_row_switcher(&context),
            Some(KeyAction::KeyboardType(KeyboardVariant::NumericNineGrid))
        );
    }

    #[test]
    fn test_factory_insets_and_swipes() {
        let mut context = KeyboardContext::new(
            DeviceType::Phone,
            KeyboardVariant::Chinese(KeyboardCase::Uppercased),
        );
        let swipe = KeySwipe::new(SwipeDirection::Down, KeyAction::character("1"));
        context.swipes.insert(
            &KeyboardVariant::Chinese(KeyboardCase::Lowercased),
            &KeyAction::character("q"),
            vec![swipe.clone()],
        );
        let factory = ItemFactory::new(&context);

        let key = factory.item(KeyAction::character("Q"), WidthUnit::Input);
        assert_eq!(key.swipes, vec![swipe]);
        assert_eq!(key.insets, LayoutConfiguration::PHONE.button_insets);
        assert_eq!(key.height, LayoutConfiguration::PHONE.row_height);

        let margin =
            factory.item(KeyAction::CharacterMargin("a".to_string()), WidthUnit::Available);
        assert_eq!(margin.insets, Insets::ZERO);
    }
}
