//! T9-style nine-grid layouts.
//!
//! Both nine-grids are fixed 3x3 grids with a trailing key column and a
//! bottom row. A scrollable symbol list sits left of the grid; see
//! [`NineGridSideColumn`].

use super::common::{return_action, ItemFactory};
use crate::models::{
    InputSet, Insets, KeyAction, KeyboardCase, KeyboardContext, KeyboardVariant, Layout,
    LayoutRow, WidthUnit,
};

/// Insets of every nine-grid key.
pub const NINE_GRID_INSETS: Insets = Insets::uniform(3.0);

/// Letter groups of the Chinese nine-grid, row by row.
const CHINESE_GROUPS: [[&str; 3]; 3] = [
    ["@/.", "ABC", "DEF"],
    ["GHI", "JKL", "MNO"],
    ["PQRS", "TUV", "WXYZ"],
];

/// Scrollable symbol list shown left of a nine-grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NineGridSideColumn {
    /// Symbols from top to bottom
    pub symbols: Vec<String>,
    /// Symbols go through the phonetic engine
    pub process_by_engine: bool,
}

impl NineGridSideColumn {
    /// Side column of the active nine-grid, `None` for other keyboards.
    #[must_use]
    pub fn for_context(context: &KeyboardContext) -> Option<Self> {
        let settings = &context.settings;
        let symbols = match context.keyboard_type {
            KeyboardVariant::NumericNineGrid => &settings.numeric_nine_grid_symbols,
            KeyboardVariant::ChineseNineGrid => &settings.chinese_nine_grid_symbols,
            _ => return None,
        };
        Some(Self {
            symbols: symbols.clone(),
            process_by_engine: settings.right_symbol_process_by_engine_on_nine_grid,
        })
    }

    /// Actions of the listed symbols.
    #[must_use]
    pub fn actions(&self) -> Vec<KeyAction> {
        self.symbols
            .iter()
            .map(|symbol| {
                if self.process_by_engine {
                    KeyAction::Character(symbol.clone())
                } else {
                    KeyAction::Symbol(symbol.clone())
                }
            })
            .collect()
    }

    /// Column width: one input key of the grid.
    ///
    /// `grid_width` is the width left of the keyboard once the column is
    /// placed, i.e. the total width the grid rows are laid out in.
    #[must_use]
    pub fn width(&self, layout: &Layout, grid_width: f64) -> f64 {
        layout.input_width(grid_width)
    }
}

/// Builds the numeric nine-grid.
///
/// ```text
/// 1 2 3 backspace
/// 4 5 6 .
/// 7 8 9 @
/// back  symbols  0  space  return
/// ```
pub(crate) fn build_numeric_rows(context: &KeyboardContext) -> Vec<LayoutRow> {
    let settings = &context.settings;
    let digit = |text: String| {
        if settings.number_key_process_by_engine_on_nine_grid {
            KeyAction::Character(text)
        } else {
            KeyAction::Symbol(text)
        }
    };
    let side_symbol = |text: &str| {
        if settings.right_symbol_process_by_engine_on_nine_grid {
            KeyAction::character(text)
        } else {
            KeyAction::symbol(text)
        }
    };

    let mut digits = InputSet::numeric_nine_grid()
        .rows_for(context.device_type)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|item| digit(item.neutral))
                .collect::<Vec<_>>()
        });
    let mut next_row = || digits.next().unwrap_or_default();

    let mut top = next_row();
    top.push(KeyAction::Backspace);
    let mut middle = next_row();
    middle.push(side_symbol("."));
    let mut lower = next_row();
    lower.push(side_symbol("@"));

    let mut bottom = vec![
        KeyAction::ReturnLastKeyboard,
        KeyAction::KeyboardType(KeyboardVariant::ClassifySymbolic { light: true }),
    ];
    bottom.extend(next_row().into_iter().take(1));
    bottom.push(KeyAction::Space);
    bottom.push(return_action(context));

    items(context, &[top, middle, lower, bottom])
}

/// Builds the Chinese nine-grid.
///
/// ```text
/// @/.   ABC  DEF   backspace
/// GHI   JKL  MNO   clear spelling
/// PQRS  TUV  WXYZ  return
/// symbols  123  space  ABC
/// ```
pub(crate) fn build_chinese_rows(context: &KeyboardContext) -> Vec<LayoutRow> {
    let trailing = [
        KeyAction::Backspace,
        KeyAction::CleanSpellingArea,
        return_action(context),
    ];
    let mut rows: Vec<Vec<KeyAction>> = CHINESE_GROUPS
        .iter()
        .zip(trailing)
        .map(|(groups, trailing)| {
            groups
                .iter()
                .map(|group| KeyAction::NineGrid((*group).to_string()))
                .chain(std::iter::once(trailing))
                .collect()
        })
        .collect();

    rows.push(vec![
        KeyAction::KeyboardType(KeyboardVariant::ClassifySymbolic { light: false }),
        KeyAction::KeyboardType(KeyboardVariant::NumericNineGrid),
        KeyAction::Space,
        KeyAction::KeyboardType(KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)),
    ]);

    items(context, &rows)
}

/// Grid rows are `Input` wide throughout; the bottom row shares what its
/// input keys leave.
fn items(context: &KeyboardContext, rows: &[Vec<KeyAction>]) -> Vec<LayoutRow> {
    let factory = ItemFactory::new(context);
    let height = context.layout_configuration().row_height;
    let bottom = rows.len().saturating_sub(1);

    rows.iter()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .map(|action| {
                    let width = if row_index < bottom || action.is_input_action() {
                        WidthUnit::Input
                    } else {
                        WidthUnit::Available
                    };
                    factory.item_with(action.clone(), width, height, NINE_GRID_INSETS)
                })
                .collect()
        })
        .collect()
}
