//! Crate-wide constants.

/// Locale assumed until the host reports one.
pub const DEFAULT_LOCALE: &str = "zh-Hans";

/// File name of the settings file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "imekit.toml";
