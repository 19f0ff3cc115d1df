//! Device and orientation geometry for keyboard rows.
//!
//! # Standard Configurations
//!
//! | Device            | Orientation | Radius | Insets (h/v) | Row height |
//! |-------------------|-------------|--------|--------------|------------|
//! | Pad               | portrait    | 5      | 6 / 4        | 64         |
//! | Pad               | landscape   | 7      | 7 / 6        | 86         |
//! | Large Pad Pro     | portrait    | 6      | 4 / 4        | 69         |
//! | Large Pad Pro     | landscape   | 8      | 7 / 5        | 88         |
//! | Phone             | portrait    | 5      | 3 / 6        | 54         |
//! | Phone             | landscape   | 5      | 3 / 4        | 40         |
//! | Phone Pro Max     | portrait    | 5      | 3 / 5.5      | 56         |
//! | Phone Pro Max     | landscape   | 5      | 3 / 4        | 40         |
//!
//! Floating keyboards always use phone geometry.

use crate::models::Insets;
use serde::{Deserialize, Serialize};

/// Physical device family hosting the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Handset
    #[default]
    Phone,
    /// Tablet
    Pad,
}

/// Interface orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Whether this is portrait.
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

/// Screen size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScreenSize {
    /// Width in points
    pub width: f64,
    /// Height in points
    pub height: f64,
}

impl ScreenSize {
    /// Large iPad Pro screen in portrait.
    pub const PAD_PRO_LARGE_PORTRAIT: Self = Self::new(1024.0, 1366.0);
    /// Pro Max phone screen in portrait.
    pub const PHONE_PRO_MAX_PORTRAIT: Self = Self::new(428.0, 926.0);

    /// Creates a screen size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether this is `other` in either orientation.
    #[must_use]
    pub fn is_screen_size(&self, other: Self) -> bool {
        self.is_equal_with_tolerance(other, 0.0)
    }

    /// Whether both sides match `other` within `tolerance`, in either orientation.
    #[must_use]
    pub fn is_equal_with_tolerance(&self, other: Self, tolerance: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= tolerance;
        (close(self.width, other.width) && close(self.height, other.height))
            || (close(self.width, other.height) && close(self.height, other.width))
    }
}

/// Row geometry for one device and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    /// Key corner radius
    pub button_corner_radius: f64,
    /// Key insets
    pub button_insets: Insets,
    /// Row height including insets
    pub row_height: f64,
}

impl LayoutConfiguration {
    /// Pad, portrait
    pub const PAD: Self = Self::new(5.0, Insets::horizontal(6.0, 4.0), 64.0);
    /// Pad, landscape
    pub const PAD_LANDSCAPE: Self = Self::new(7.0, Insets::horizontal(7.0, 6.0), 86.0);
    /// Large Pad Pro, portrait
    pub const PAD_PRO_LARGE: Self = Self::new(6.0, Insets::horizontal(4.0, 4.0), 69.0);
    /// Large Pad Pro, landscape
    pub const PAD_PRO_LARGE_LANDSCAPE: Self = Self::new(8.0, Insets::horizontal(7.0, 5.0), 88.0);
    /// Phone, portrait
    pub const PHONE: Self = Self::new(5.0, Insets::horizontal(3.0, 6.0), 54.0);
    /// Phone, landscape
    pub const PHONE_LANDSCAPE: Self = Self::new(5.0, Insets::horizontal(3.0, 4.0), 40.0);
    /// Pro Max phone, portrait
    pub const PHONE_PRO_MAX: Self = Self::new(5.0, Insets::horizontal(3.0, 5.5), 56.0);
    /// Pro Max phone, landscape
    pub const PHONE_PRO_MAX_LANDSCAPE: Self = Self::new(5.0, Insets::horizontal(3.0, 4.0), 40.0);

    /// Creates a configuration.
    #[must_use]
    pub const fn new(button_corner_radius: f64, button_insets: Insets, row_height: f64) -> Self {
        Self {
            button_corner_radius,
            button_insets,
            row_height,
        }
    }

    /// Standard configuration for a device, screen and orientation.
    #[must_use]
    pub fn standard(
        device: DeviceType,
        screen: ScreenSize,
        orientation: Orientation,
        is_floating: bool,
    ) -> Self {
        let device = if is_floating { DeviceType::Phone } else { device };
        match device {
            DeviceType::Pad => Self::standard_pad(screen, orientation),
            DeviceType::Phone => Self::standard_phone(screen, orientation),
        }
    }

    /// Standard pad configuration.
    #[must_use]
    pub fn standard_pad(screen: ScreenSize, orientation: Orientation) -> Self {
        let portrait = orientation.is_portrait();
        if screen.is_screen_size(ScreenSize::PAD_PRO_LARGE_PORTRAIT) {
            return if portrait {
                Self::PAD_PRO_LARGE
            } else {
                Self::PAD_PRO_LARGE_LANDSCAPE
            };
        }
        if portrait {
            Self::PAD
        } else {
            Self::PAD_LANDSCAPE
        }
    }

    /// Standard phone configuration.
    #[must_use]
    pub fn standard_phone(screen: ScreenSize, orientation: Orientation) -> Self {
        let portrait = orientation.is_portrait();
        if screen.is_equal_with_tolerance(ScreenSize::PHONE_PRO_MAX_PORTRAIT, 10.0) {
            return if portrait {
                Self::PHONE_PRO_MAX
            } else {
                Self::PHONE_PRO_MAX_LANDSCAPE
            };
        }
        if portrait {
            Self::PHONE
        } else {
            Self::PHONE_LANDSCAPE
        }
    }
}
