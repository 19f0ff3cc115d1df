//! Built keyboard layouts and the per-width input key cache.

use crate::models::{
    resolve_reference_input_width, Insets, KeyAction, KeyboardVariant, LayoutItem, LayoutRow,
    WidthUnit,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Display scale used when the host does not report one.
pub const DEFAULT_DISPLAY_SCALE: f64 = 3.0;

/// Ordered rows of layout items, as produced by a builder.
///
/// The layout owns a cache of resolved reference input widths keyed by total
/// row width. The cache is never shared between layouts; a rebuilt layout
/// starts empty, which is how orientation changes invalidate it.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Rows from top to bottom
    pub item_rows: Vec<LayoutRow>,
    /// Height used for items added after building
    pub ideal_item_height: f64,
    /// Insets used for items added after building
    pub ideal_item_insets: Insets,
    /// Name of the custom keyboard definition the rows came from
    pub custom_keyboard: Option<String>,
    display_scale: f64,
    width_cache: RefCell<HashMap<u64, f64>>,
}

impl Layout {
    /// Creates a layout; ideal height and insets are taken from the first item.
    #[must_use]
    pub fn new(item_rows: Vec<LayoutRow>) -> Self {
        let first = item_rows.iter().flatten().next();
        let ideal_item_height = first.map_or(0.0, |item| item.height);
        let ideal_item_insets = first.map_or(Insets::ZERO, |item| item.insets);

        Self {
            item_rows,
            ideal_item_height,
            ideal_item_insets,
            custom_keyboard: None,
            display_scale: DEFAULT_DISPLAY_SCALE,
            width_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Overrides the ideal item height.
    #[must_use]
    pub const fn with_ideal_item_height(mut self, height: f64) -> Self {
        self.ideal_item_height = height;
        self
    }

    /// Overrides the ideal item insets.
    #[must_use]
    pub const fn with_ideal_item_insets(mut self, insets: Insets) -> Self {
        self.ideal_item_insets = insets;
        self
    }

    /// Records the custom keyboard definition the layout was built from.
    #[must_use]
    pub fn with_custom_keyboard(mut self, name: impl Into<String>) -> Self {
        self.custom_keyboard = Some(name.into());
        self
    }

    /// Sets the pixel grid scale and clears the width cache.
    #[must_use]
    pub fn with_display_scale(mut self, scale: f64) -> Self {
        self.display_scale = scale;
        self.width_cache.get_mut().clear();
        self
    }

    /// Pixel grid scale used when rounding widths.
    #[must_use]
    pub const fn display_scale(&self) -> f64 {
        self.display_scale
    }

    /// Index of the bottom (space) row, `None` for an empty layout.
    #[must_use]
    pub fn bottom_row_index(&self) -> Option<usize> {
        self.item_rows.len().checked_sub(1)
    }

    /// System-styled items of the bottom row.
    #[must_use]
    pub fn bottom_row_system_items(&self) -> Vec<&LayoutItem> {
        self.item_rows
            .last()
            .map(|row| {
                row.iter()
                    .filter(|item| item.action.is_system_action())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the bottom row switches to the given keyboard variant.
    #[must_use]
    pub fn has_keyboard_switcher(&self, target: &KeyboardVariant) -> bool {
        self.item_rows.last().is_some_and(|row| {
            row.iter()
                .any(|item| item.action.keyboard_type_target() == Some(target))
        })
    }

    /// Width shared by every `Input` key for the given total row width.
    ///
    /// This is the smallest reference input width any row asks for, or `0.0`
    /// when no row has an `Input` key. The result is cached per total width.
    #[must_use]
    pub fn input_width(&self, total_width: f64) -> f64 {
        let key = total_width.to_bits();
        if let Some(width) = self.width_cache.borrow().get(&key) {
            return *width;
        }

        let width = self
            .item_rows
            .iter()
            .filter_map(|row| resolve_reference_input_width(row, total_width, self.display_scale))
            .reduce(f64::min)
            .unwrap_or(0.0);

        self.width_cache.borrow_mut().insert(key, width);
        width
    }

    /// Concrete widths of one row's items, in order.
    ///
    /// `Available` items split whatever the other items leave of
    /// `total_width` equally. Nothing is clamped: an overfull row yields
    /// negative `Available` widths for the renderer to deal with.
    #[must_use]
    pub fn row_widths(&self, row: &[LayoutItem], total_width: f64) -> Vec<f64> {
        let reference = self.input_width(total_width);
        let resolved: Vec<Option<f64>> = row
            .iter()
            .map(|item| item.width.resolve(total_width, reference))
            .collect();

        let used: f64 = resolved.iter().flatten().sum();
        let available_count = resolved.iter().filter(|width| width.is_none()).count();
        let share = if available_count == 0 {
            0.0
        } else {
            (total_width - used) / available_count as f64
        };

        resolved
            .into_iter()
            .map(|width| width.unwrap_or(share))
            .collect()
    }

    /// New bottom row item using the first bottom system item as a template.
    ///
    /// Returns `None` when the bottom row has no system item to copy from.
    #[must_use]
    pub fn try_create_bottom_row_item(&self, action: KeyAction) -> Option<LayoutItem> {
        let template = self.bottom_row_system_items().into_iter().next()?;
        Some(LayoutItem::new(
            action,
            template.width,
            template.height,
            template.insets,
        ))
    }

    /// Number of `Input` keys per row, used by debug logging.
    pub(crate) fn input_key_counts(&self) -> Vec<usize> {
        self.item_rows
            .iter()
            .map(|row| row.iter().filter(|item| item.width == WidthUnit::Input).count())
            .collect()
    }
}
