//! Declarative key widths and the reference input width resolver.
//!
//! # Width Units
//!
//! | Unit                 | Resolved width                        |
//! |----------------------|---------------------------------------|
//! | `Available`          | equal share of the row's leftover     |
//! | `Input`              | the reference input width             |
//! | `InputPercentage(p)` | `p` x reference input width           |
//! | `Percentage(p)`      | `p` x total row width                 |
//! | `Points(p)`          | `p`                                   |
//!
//! The reference input width is derived, never declared: it is whatever is
//! left of a row after `Percentage`/`Points` keys are placed, divided by the
//! row's input demand. A [`crate::models::Layout`] takes the minimum over its
//! rows so every `Input` key on screen ends up the same width.

use crate::models::LayoutItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sizing rule of a key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum WidthUnit {
    /// Shares the row's leftover space with the other `Available` keys
    Available,
    /// Exactly the reference input width
    Input,
    /// Fraction of the reference input width
    InputPercentage(f64),
    /// Fraction of the total row width
    Percentage(f64),
    /// Fixed width in points
    Points(f64),
}

impl WidthUnit {
    /// Whether this is the plain `Input` unit.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Input)
    }

    /// Width taken before input keys are sized (`Percentage` and `Points` only).
    #[must_use]
    pub fn allocated_width(self, total_width: f64) -> f64 {
        match self {
            Self::Percentage(percentage) => total_width * percentage,
            Self::Points(points) => points,
            Self::Available | Self::Input | Self::InputPercentage(_) => 0.0,
        }
    }

    /// Share of the reference input width this unit asks for.
    #[must_use]
    pub const fn input_factor(self) -> f64 {
        match self {
            Self::Input => 1.0,
            Self::InputPercentage(percentage) => percentage,
            Self::Available | Self::Percentage(_) | Self::Points(_) => 0.0,
        }
    }

    /// Concrete width for this unit, or `None` for `Available`.
    ///
    /// `Available` keys are sized by whoever lays out the full row, since their
    /// width depends on their siblings.
    #[must_use]
    pub fn resolve(self, total_width: f64, reference_input_width: f64) -> Option<f64> {
        match self {
            Self::Available => None,
            Self::Input => Some(reference_input_width),
            Self::InputPercentage(percentage) => Some(reference_input_width * percentage),
            Self::Percentage(percentage) => Some(total_width * percentage),
            Self::Points(points) => Some(points),
        }
    }
}

impl fmt::Display for WidthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Input => write!(f, "input"),
            Self::InputPercentage(p) => write!(f, "inputPercentage({p})"),
            Self::Percentage(p) => write!(f, "percentage({p})"),
            Self::Points(p) => write!(f, "points({p})"),
        }
    }
}

/// Rounds a measurement to the display's pixel grid.
///
/// A non-positive or non-finite scale leaves the value untouched.
#[must_use]
pub fn round_to_pixel_grid(value: f64, scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        (value * scale).round() / scale
    } else {
        value
    }
}

/// Resolves the reference input width a single row asks for.
///
/// Returns `None` when the row has no `Input` key, and also when the row's
/// input demand does not sum to a positive finite factor (a malformed row
/// such as `Input` next to `InputPercentage(-1.0)`). Such rows take no part
/// in the layout-wide minimum.
#[must_use]
pub fn resolve_reference_input_width(
    row: &[LayoutItem],
    total_width: f64,
    scale: f64,
) -> Option<f64> {
    if !row.iter().any(|item| item.width.is_input()) {
        return None;
    }

    let taken: f64 = row
        .iter()
        .map(|item| item.width.allocated_width(total_width))
        .sum();
    let remaining = total_width - taken;
    let demand_factor: f64 = row.iter().map(|item| item.width.input_factor()).sum();

    if !demand_factor.is_finite() || demand_factor <= 0.0 {
        tracing::debug!(demand_factor, "row input demand is not positive, skipping row");
        return None;
    }

    Some(round_to_pixel_grid(remaining / demand_factor, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Insets, KeyAction};

    fn item(width: WidthUnit) -> LayoutItem {
        LayoutItem::new(KeyAction::character("a"), width, 54.0, Insets::ZERO)
    }

    #[test]
    fn test_allocated_width() {
        assert_eq!(WidthUnit::Percentage(0.13).allocated_width(320.0), 320.0 * 0.13);
        assert_eq!(WidthUnit::Points(40.0).allocated_width(320.0), 40.0);
        assert_eq!(WidthUnit::Input.allocated_width(320.0), 0.0);
        assert_eq!(WidthUnit::Available.allocated_width(320.0), 0.0);
    }

    #[test]
    fn test_input_factor() {
        assert_eq!(WidthUnit::Input.input_factor(), 1.0);
        assert_eq!(WidthUnit::InputPercentage(1.5).input_factor(), 1.5);
        assert_eq!(WidthUnit::Percentage(0.5).input_factor(), 0.0);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(WidthUnit::Available.resolve(320.0, 32.0), None);
        assert_eq!(WidthUnit::Input.resolve(320.0, 32.0), Some(32.0));
        assert_eq!(WidthUnit::InputPercentage(2.0).resolve(320.0, 32.0), Some(64.0));
        assert_eq!(WidthUnit::Percentage(0.5).resolve(320.0, 32.0), Some(160.0));
        assert_eq!(WidthUnit::Points(12.0).resolve(320.0, 32.0), Some(12.0));
    }

    #[test]
    fn test_round_to_pixel_grid() {
        assert!((round_to_pixel_grid(26.311, 3.0) - 79.0 / 3.0).abs() < 1e-9);
        assert_eq!(round_to_pixel_grid(26.3, 1.0), 26.0);
        assert_eq!(round_to_pixel_grid(26.3, 0.0), 26.3);
    }

    #[test]
    fn test_row_without_input_has_no_reference() {
        let row = vec![item(WidthUnit::Available), item(WidthUnit::Percentage(0.5))];
        assert_eq!(resolve_reference_input_width(&row, 320.0, 1.0), None);
    }

    #[test]
    fn test_input_percentage_only_row_has_no_reference() {
        let row = vec![item(WidthUnit::InputPercentage(1.0))];
        assert_eq!(resolve_reference_input_width(&row, 320.0, 1.0), None);
    }

    #[test]
    fn test_reference_with_fixed_keys() {
        let mut row = vec![item(WidthUnit::Percentage(0.25))];
        row.extend((0..4).map(|_| item(WidthUnit::Input)));
        row.push(item(WidthUnit::Points(40.0)));
        // 400 - 100 - 40 = 260, 4 input keys
        assert_eq!(resolve_reference_input_width(&row, 400.0, 1.0), Some(65.0));
    }

    #[test]
    fn test_reference_with_input_percentage() {
        let row = vec![
            item(WidthUnit::Input),
            item(WidthUnit::Input),
            item(WidthUnit::InputPercentage(2.0)),
        ];
        assert_eq!(resolve_reference_input_width(&row, 400.0, 1.0), Some(100.0));
    }

    #[test]
    fn test_zero_demand_row_is_skipped() {
        let row = vec![item(WidthUnit::Input), item(WidthUnit::InputPercentage(-1.0))];
        assert_eq!(resolve_reference_input_width(&row, 320.0, 1.0), None);
    }

    #[test]
    fn test_display_expressions() {
        assert_eq!(WidthUnit::Percentage(0.13).to_string(), "percentage(0.13)");
        assert_eq!(WidthUnit::Input.to_string(), "input");
        assert_eq!(WidthUnit::InputPercentage(1.5).to_string(), "inputPercentage(1.5)");
    }
}
