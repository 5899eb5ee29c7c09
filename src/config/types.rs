use serde::{Deserialize, Serialize};

use crate::demo::DemoKind;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default settings for script replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Demo reducer used when `--demo` is not given (default: counter).
    #[serde(default)]
    pub demo: DemoKind,
    /// Print the state after every dispatch, not only at the end (default: true).
    #[serde(default = "default_print_every_state")]
    pub print_every_state: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_print_every_state() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            demo: DemoKind::default(),
            print_every_state: default_print_every_state(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
