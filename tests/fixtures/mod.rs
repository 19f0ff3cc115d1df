//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use imekit::models::{
    DeviceType, InputSet, InputSetRow, KeyAction, KeyboardCase, KeyboardContext,
    KeyboardVariant, LayoutRow, LocalizedInputSets, ScreenSize, StandardInputSetProvider,
};
use imekit::services::LayoutRouter;

/// Custom keyboard definitions used across tests.
pub const CUSTOM_KEYBOARDS_YAML: &str = r"
keyboards:
  - name: t9
    row_height: 48
    rows:
      - keys:
          - action: character(a)
          - action: character(b)
          - action: backspace
            width: percentage(0.2)
      - keys:
          - action: keyboardType(custom(symbols))
            width: { portrait: percentage(0.25), landscape: percentage(0.15) }
          - action: space
            width: available
          - action: return
            width: percentage(0.25)
  - name: symbols
    button_insets: 2
    rows:
      - keys:
          - action: symbol(@)
          - action: symbol(#)
          - action: keyboardType(custom(t9))
";

/// Deterministic start time for timer-based tests.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
}

/// `start_time()` shifted by `ms` milliseconds.
pub fn at_ms(ms: i64) -> DateTime<Utc> {
    start_time() + TimeDelta::milliseconds(ms)
}

/// Portrait phone context for a variant.
pub fn phone_context(variant: KeyboardVariant) -> KeyboardContext {
    KeyboardContext::new(DeviceType::Phone, variant)
}

/// Portrait pad context for a variant.
pub fn pad_context(variant: KeyboardVariant) -> KeyboardContext {
    KeyboardContext::new(DeviceType::Pad, variant).with_screen_size(ScreenSize::new(820.0, 1180.0))
}

/// Lowercase English letters.
pub fn english_lowercase() -> KeyboardVariant {
    KeyboardVariant::Alphabetic(KeyboardCase::Lowercased)
}

/// Provider whose letter rows have exactly the given lengths.
pub fn provider_with_letter_rows(lengths: &[usize]) -> StandardInputSetProvider {
    let letters: Vec<char> = ('a'..='z').collect();
    let rows = lengths
        .iter()
        .map(|&len| InputSetRow::chars(letters.iter().take(len).collect::<String>()))
        .collect();

    let mut provider = StandardInputSetProvider::default();
    provider.english = LocalizedInputSets {
        alphabetic: InputSet::new(rows),
        ..LocalizedInputSets::english()
    };
    provider
}

/// Router over the standard character sets.
pub fn standard_router() -> LayoutRouter {
    LayoutRouter::new(StandardInputSetProvider::default())
}

/// Actions of a built row.
pub fn actions(row: &LayoutRow) -> Vec<KeyAction> {
    row.iter().map(|item| item.action.clone()).collect()
}
