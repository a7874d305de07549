use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
///
/// Every section is optional in the file; missing sections and fields
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// How operands are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Separator between digit groups in the integer part (default: `,`).
    pub group_separator: char,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    pub tick_rate_ms: u64,
    /// Draw the clickable keypad under the display (default: true).
    pub show_keypad: bool,
}

/// Diagnostic logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter used when `RUST_LOG` is unset (default: "info").
    pub level: String,
    /// Log file path. Defaults to `<cache_dir>/calcterm/calcterm.log`.
    pub file: Option<PathBuf>,
}

fn default_group_separator() -> char {
    ','
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_keypad: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
