//! termcolors - terminal color capability detection
//!
//! This library works out how many colors a terminal can render, using
//! nothing but the environment: whether standard output is a terminal,
//! explicit override variables, the terminal program and `TERM`. It also
//! renders sample swatches for each color depth.
//!
//! # Modules
//!
//! * [`capability`] - Color levels and support queries
//! * [`environment`] - Environment snapshot used as detection input
//! * [`resolver`] - The detection policy
//! * [`swatch`] - Color grids and the capability report
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging setup

/// Color levels and the support queries derived from them
pub mod capability;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Snapshot of environment variables and TTY status
pub mod environment;

/// Logging setup for debugging detection
pub mod logger;

/// Capability resolution from environment signals
pub mod resolver;

/// Swatch grids and the capability report
pub mod swatch;

pub use capability::{ColorLevel, ColorSupport, ParseColorLevelError};
pub use environment::Environment;
pub use resolver::{detect, Resolver};
