//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Application name
pub const APP_NAME: &str = "Whisk & Bliss";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long the "message sent" acknowledgment stays up before the form clears
pub const SUBMIT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "whisk-bliss.log";

/// Per-user configuration directory (under $HOME)
pub const CONFIG_DIR_NAME: &str = ".whisk-bliss";

/// Catalog override file inside the configuration directory
pub const CATALOG_FILE_NAME: &str = "catalog.yaml";

/// Built-in catalog, compiled into the binary
pub const DEFAULT_CATALOG_YAML: &str = include_str!("../assets/catalog.yaml");

/// Currency prefix used when printing prices
pub const CURRENCY_PREFIX: &str = "Rs.";
