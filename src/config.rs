//! Configuration for layout building and keyboard behavior.
//!
//! Settings are plain in-process values. Hosts that persist them can use the
//! TOML helpers here; nothing is read from disk implicitly.

use anyhow::{Context, Result};
use chrono::TimeDelta;
use crate::constants::CONFIG_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Extra key placed next to the space bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSideButton {
    /// Text the key inserts
    pub value: String,
    /// Send through the phonetic engine instead of inserting directly
    #[serde(default)]
    pub process_by_engine: bool,
}

/// Layout toggles read by the builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardSettings {
    /// Keep the current case instead of following autocapitalization
    pub lock_shift_state: bool,
    /// Numeric switchers open the nine-grid numeric keyboard
    pub enable_nine_grid_of_numeric_keyboard: bool,
    /// Symbol switchers open the classified symbol keyboard
    pub enable_classify_symbolic_keyboard: bool,
    /// Append a semicolon key to the Chinese middle row
    pub display_semicolon_button: bool,
    /// Show a classified symbol key in the Chinese bottom row
    pub display_classify_symbol_button: bool,
    /// Show the Chinese/English switch in the Chinese bottom row
    pub display_chinese_english_switch_button: bool,
    /// Place the Chinese/English switch left of the space bar
    pub chinese_english_switch_on_left_of_space: bool,
    /// Key left of the space bar
    pub space_left_button: Option<SpaceSideButton>,
    /// Key right of the space bar
    pub space_right_button: Option<SpaceSideButton>,
    /// Nine-grid digits go through the phonetic engine
    pub number_key_process_by_engine_on_nine_grid: bool,
    /// Nine-grid side column symbols go through the phonetic engine
    pub right_symbol_process_by_engine_on_nine_grid: bool,
    /// Side column of the numeric nine-grid
    pub numeric_nine_grid_symbols: Vec<String>,
    /// Side column of the Chinese nine-grid
    pub chinese_nine_grid_symbols: Vec<String>,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            lock_shift_state: true,
            enable_nine_grid_of_numeric_keyboard: false,
            enable_classify_symbolic_keyboard: false,
            display_semicolon_button: false,
            display_classify_symbol_button: false,
            display_chinese_english_switch_button: true,
            chinese_english_switch_on_left_of_space: false,
            space_left_button: None,
            space_right_button: None,
            number_key_process_by_engine_on_nine_grid: false,
            right_symbol_process_by_engine_on_nine_grid: false,
            numeric_nine_grid_symbols: ["+", "-", "*", "/"].map(String::from).to_vec(),
            chinese_nine_grid_symbols: ["，", "。", "？", "！", "…", "~", "'", "、"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Timing thresholds of the behavior policy, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Maximum gap between two shift taps that locks caps
    pub double_tap_threshold_ms: u32,
    /// Maximum gap between two space taps that ends a sentence
    pub end_sentence_threshold_ms: u32,
    /// Backspace hold time after which whole words are deleted
    pub backspace_word_threshold_ms: u32,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            double_tap_threshold_ms: 500,
            end_sentence_threshold_ms: 3000,
            backspace_word_threshold_ms: 3000,
        }
    }
}

impl BehaviorSettings {
    /// Double tap window.
    #[must_use]
    pub fn double_tap_threshold(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.double_tap_threshold_ms))
    }

    /// Sentence ending window.
    #[must_use]
    pub fn end_sentence_threshold(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.end_sentence_threshold_ms))
    }

    /// Backspace hold time before word deletion.
    #[must_use]
    pub fn backspace_word_threshold(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.backspace_word_threshold_ms))
    }
}

/// Complete configuration.
///
/// # TOML Layout
///
/// ```toml
/// [keyboard]
/// lock_shift_state = false
/// display_semicolon_button = true
///
/// [keyboard.space_left_button]
/// value = ","
///
/// [behavior]
/// double_tap_threshold_ms = 400
/// ```
///
/// # Validation
///
/// - every behavior threshold must be positive
/// - space side buttons must have a non-empty value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout toggles
    pub keyboard: KeyboardSettings,
    /// Behavior policy thresholds
    pub behavior: BehaviorSettings,
}

impl Config {
    /// Creates a Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .context(format!("Failed to load config file: {}", path.display()))
    }

    /// Loads [`CONFIG_FILE_NAME`] from a configuration directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Saves configuration to a TOML file using a temp file and rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = self.to_toml_string()?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("double_tap_threshold_ms", self.behavior.double_tap_threshold_ms),
            ("end_sentence_threshold_ms", self.behavior.end_sentence_threshold_ms),
            ("backspace_word_threshold_ms", self.behavior.backspace_word_threshold_ms),
        ];
        for (name, value) in thresholds {
            if value == 0 {
                anyhow::bail!("behavior.{name} must be positive");
            }
        }

        let side_buttons = [
            ("space_left_button", &self.keyboard.space_left_button),
            ("space_right_button", &self.keyboard.space_right_button),
        ];
        for (name, button) in side_buttons {
            if button.as_ref().is_some_and(|button| button.value.is_empty()) {
                anyhow::bail!("keyboard.{name} must have a non-empty value");
            }
        }

        let symbol_lists = [
            ("numeric_nine_grid_symbols", &self.keyboard.numeric_nine_grid_symbols),
            ("chinese_nine_grid_symbols", &self.keyboard.chinese_nine_grid_symbols),
        ];
        for (name, symbols) in symbol_lists {
            if symbols.iter().any(String::is_empty) {
                anyhow::bail!("keyboard.{name} cannot contain empty symbols");
            }
        }

        Ok(())
    }
}
