//! Constants used throughout the application
//!
//! Environment variable names, report text and swatch grid sizes live here
//! so detection, rendering and tests agree on them.

// Environment variables read during detection
pub const ENV_TERM: &str = "TERM";
pub const ENV_TERM_PROGRAM: &str = "TERM_PROGRAM";
pub const ENV_TERM_PROGRAM_VERSION: &str = "TERM_PROGRAM_VERSION";
/// Default name of the variable a terminal sets to declare its color depth
pub const DEFAULT_OVERRIDE_VAR: &str = "TERM_COLORS";
/// Default name of the variable a user sets to restrict the color depth
pub const DEFAULT_USER_OVERRIDE_VAR: &str = "USER_TERM_COLORS";
/// Prefix forming the alias of each override variable
pub const DEFAULT_LOCALE_PREFIX: &str = "LC_";

// Known terminal programs
pub const PROGRAM_ITERM: &str = "iTerm.app";
pub const PROGRAM_HYPER: &str = "Hyper";
pub const PROGRAM_APPLE_TERMINAL: &str = "Apple_Terminal";
/// First iTerm major version with 24-bit color
pub const ITERM_TRUECOLOR_MAJOR: i64 = 3;

// Report lines
pub const REPORT_NO_COLORS: &str = "No Colors Supported";
pub const REPORT_16_COLORS: &str = "16 Colors Supported";
pub const REPORT_256_COLORS: &str = "256 Colors Supported";
pub const REPORT_256_COLORS_UNSUPPORTED: &str = "256 Colors NOT Supported";
pub const REPORT_TRUECOLOR: &str = "Truecolor Supported";
pub const REPORT_TRUECOLOR_UNSUPPORTED: &str = "Truecolor NOT Supported";

// Escape sequences
pub const SGR_RESET: &str = "\x1b[0m";

// Swatch grid dimensions as (rows, columns)
pub const GRID_16_COLORS: (usize, usize) = (2, 8);
pub const GRID_256_COLORS: (usize, usize) = (8, 32);
pub const GRID_TRUECOLOR: (usize, usize) = (32, 48);

// Files
pub const CONFIG_FILE_NAME: &str = "termcolors.toml";
pub const APP_DIR_NAME: &str = "termcolors";
pub const LOG_FILE_NAME: &str = "termcolors.log";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const WARN_CONFIG_FALLBACK: &str = "⚠️  Ignoring configuration, using defaults";
pub const WARN_LOGGING_DISABLED: &str = "⚠️  Could not start logging";
