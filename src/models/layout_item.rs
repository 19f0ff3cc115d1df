//! Layout items: one declared key with its width rule, height and insets.

use crate::models::{KeyAction, SwipeDirection, WidthUnit};
use serde::{Deserialize, Serialize};

/// Edge insets of a key, applied inside its tap area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Top inset in points
    pub top: f64,
    /// Left inset in points
    pub left: f64,
    /// Bottom inset in points
    pub bottom: f64,
    /// Right inset in points
    pub right: f64,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates insets from all four edges.
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on the left/right edges and on the top/bottom edges.
    #[must_use]
    pub const fn horizontal(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Same inset on every edge.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Alternate action reached by swiping on a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySwipe {
    /// Swipe direction
    pub direction: SwipeDirection,
    /// Action triggered by the swipe
    pub action: KeyAction,
    /// Whether the action goes through the phonetic engine
    #[serde(default)]
    pub process_by_engine: bool,
    /// Whether the swipe label is drawn on the key
    #[serde(default)]
    pub display: bool,
    /// Label drawn on the key
    #[serde(default)]
    pub label: String,
}

impl KeySwipe {
    /// Creates a hidden swipe binding.
    #[must_use]
    pub fn new(direction: SwipeDirection, action: KeyAction) -> Self {
        Self {
            direction,
            action,
            process_by_engine: false,
            display: false,
            label: String::new(),
        }
    }
}

/// One key of a layout row.
///
/// Items are owned by their row and hold no reference back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    /// Action bound to the key
    pub action: KeyAction,
    /// Declared width rule
    pub width: WidthUnit,
    /// Height in points, including insets
    pub height: f64,
    /// Insets inside the tap area
    pub insets: Insets,
    /// Swipe bindings
    #[serde(default)]
    pub swipes: Vec<KeySwipe>,
}

impl LayoutItem {
    /// Creates an item without swipe bindings.
    #[must_use]
    pub const fn new(action: KeyAction, width: WidthUnit, height: f64, insets: Insets) -> Self {
        Self {
            action,
            width,
            height,
            insets,
            swipes: Vec::new(),
        }
    }

    /// Sets the swipe bindings.
    #[must_use]
    pub fn with_swipes(mut self, swipes: Vec<KeySwipe>) -> Self {
        self.swipes = swipes;
        self
    }
}

/// Ordered keys of one keyboard row.
pub type LayoutRow = Vec<LayoutItem>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_constructors() {
        assert_eq!(Insets::horizontal(3.0, 6.0), Insets::new(6.0, 3.0, 6.0, 3.0));
        assert_eq!(Insets::uniform(3.0), Insets::new(3.0, 3.0, 3.0, 3.0));
        assert_eq!(Insets::default(), Insets::ZERO);
    }

    #[test]
    fn test_layout_item_with_swipes() {
        let item = LayoutItem::new(KeyAction::character("q"), WidthUnit::Input, 54.0, Insets::ZERO)
            .with_swipes(vec![KeySwipe::new(SwipeDirection::Up, KeyAction::character("1"))]);
        assert_eq!(item.swipes.len(), 1);
        assert_eq!(item.swipes[0].direction, SwipeDirection::Up);
    }
}
