//! Data models for keyboard layouts, key actions and the keyboard context.
//!
//! Models hold no builder or policy logic beyond small derived queries; the
//! services in [`crate::services`] turn them into layouts and transitions.

pub mod action;
pub mod context;
pub mod custom_keyboard;
pub mod input_set;
pub mod keyboard_geometry;
pub mod keyboard_type;
pub mod layout;
pub mod layout_item;
pub mod text;
pub mod width;

// Re-export all model types
pub use action::{KeyAction, KeyboardGesture, ReturnKeyType, SwipeDirection};
pub use context::{AutocapitalizationType, HostKeyboardType, KeyboardContext, SwipeTable};
pub use custom_keyboard::{CustomKey, CustomKeyboard, CustomKeyboards, CustomRow, Oriented};
pub use input_set::{
    InputSet, InputSetItem, InputSetProvider, InputSetRow, LocalizedInputSets,
    StandardInputSetProvider,
};
pub use keyboard_geometry::{DeviceType, LayoutConfiguration, Orientation, ScreenSize};
pub use keyboard_type::{KeyboardCase, KeyboardVariant};
pub use layout::{Layout, DEFAULT_DISPLAY_SCALE};
pub use layout_item::{Insets, KeySwipe, LayoutItem, LayoutRow};
pub use text::{SentenceEnding, TextSnapshot, SENTENCE_DELIMITERS, WORD_DELIMITERS};
pub use width::{resolve_reference_input_width, round_to_pixel_grid, WidthUnit};
