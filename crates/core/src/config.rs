//! Configuration defaults for icon stylesheet trimming.

/// Full Tabler Icons stylesheet shipped with the theme.
pub const DEFAULT_INPUT_PATH: &str = "assets/css/tabler-icons.min.css";

/// Trimmed stylesheet served by the site.
pub const DEFAULT_OUTPUT_PATH: &str = "static/css/tabler-icons.min.css";

/// Directories searched for icon references when none are given.
pub const DEFAULT_SCAN_PATHS: &[&str] = &["layouts", "exampleSite"];

/// Directory searched by `match` when none is given.
pub const DEFAULT_MATCH_PATH: &str = ".";

pub use usage_scanner::TABLER_PATTERN as DEFAULT_USAGE_PATTERN;
