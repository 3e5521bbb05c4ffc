//! Color capability resolution
//!
//! Sources are consulted in a fixed order and the first one that gives a
//! definite answer wins:
//!
//! 1. Standard output must be a terminal, otherwise there is no color.
//! 2. Override variables (`TERM_COLORS`, `USER_TERM_COLORS` and their
//!    `LC_` aliases). When both the terminal's and the user's override are
//!    present the lower level wins, so a user can only narrow.
//! 3. Known terminal programs from `TERM_PROGRAM`.
//! 4. Patterns on `TERM`.
//!
//! Nothing here can fail. Malformed values fall through to the next source
//! and the final fallback is [`ColorLevel::None`].

use crate::capability::{ColorLevel, ColorSupport};
use crate::config::DetectionConfig;
use crate::constants::{
    ENV_TERM, ENV_TERM_PROGRAM, ENV_TERM_PROGRAM_VERSION, ITERM_TRUECOLOR_MAJOR, PROGRAM_APPLE_TERMINAL,
    PROGRAM_HYPER, PROGRAM_ITERM,
};
use crate::environment::Environment;

/// Resolves a [`ColorSupport`] from an [`Environment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    override_vars: [String; 2],
    user_override_vars: [String; 2],
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(&DetectionConfig::default())
    }
}

impl Resolver {
    #[must_use]
    pub fn new(config: &DetectionConfig) -> Self {
        let prefix = &config.locale_prefix;
        Self {
            override_vars: [
                config.override_var.clone(),
                format!("{prefix}{}", config.override_var),
            ],
            user_override_vars: [
                config.user_override_var.clone(),
                format!("{prefix}{}", config.user_override_var),
            ],
        }
    }

    /// Determine the color support described by `env`.
    #[must_use]
    pub fn resolve(&self, env: &Environment) -> ColorSupport {
        let (level, source) = self.resolve_level(env);
        log::debug!("Color level '{}' decided by {}", level, source);
        ColorSupport::new(level)
    }

    fn resolve_level(&self, env: &Environment) -> (ColorLevel, &'static str) {
        if !env.stdout_is_tty() {
            return (ColorLevel::None, "non-terminal stdout");
        }

        if let Some(level) = self.override_level(env) {
            return (level, "override variables");
        }

        if let Some(level) = program_level(env) {
            return (level, ENV_TERM_PROGRAM);
        }

        if let Some(level) = term_level(env) {
            return (level, ENV_TERM);
        }

        (ColorLevel::None, "fallback")
    }

    fn override_level(&self, env: &Environment) -> Option<ColorLevel> {
        let declared = first_parsed(env, &self.override_vars);
        let restricted = first_parsed(env, &self.user_override_vars);

        match (declared, restricted) {
            (Some(declared), Some(restricted)) => Some(declared.min(restricted)),
            (declared, restricted) => declared.or(restricted),
        }
    }
}

/// Resolve the current process environment with the default variable names.
#[must_use]
pub fn detect() -> ColorSupport {
    Resolver::default().resolve(&Environment::capture())
}

/// The first variable in `names` that holds a recognized level.
///
/// Unrecognized values are skipped as if the variable were unset.
fn first_parsed(env: &Environment, names: &[String]) -> Option<ColorLevel> {
    names.iter().find_map(|name| {
        let value = env.var(name)?;
        match value.parse::<ColorLevel>() {
            Ok(level) => Some(level),
            Err(e) => {
                log::warn!("Ignoring {}: {}", name, e);
                None
            }
        }
    })
}

fn program_level(env: &Environment) -> Option<ColorLevel> {
    match env.var(ENV_TERM_PROGRAM)? {
        PROGRAM_ITERM => {
            if major_version(env.var(ENV_TERM_PROGRAM_VERSION)) >= ITERM_TRUECOLOR_MAJOR {
                Some(ColorLevel::TrueColor)
            } else {
                Some(ColorLevel::Extended)
            }
        }
        PROGRAM_HYPER => Some(ColorLevel::TrueColor),
        PROGRAM_APPLE_TERMINAL => Some(ColorLevel::Extended),
        _ => None,
    }
}

/// Leading integer of a dotted version string, 0 when missing or malformed.
fn major_version(version: Option<&str>) -> i64 {
    version
        .and_then(|v| v.split('.').next())
        .and_then(|major| major.parse().ok())
        .unwrap_or(0)
}

fn term_level(env: &Environment) -> Option<ColorLevel> {
    let term = env.var(ENV_TERM)?;

    if term.ends_with("-256") || term.ends_with("-256color") {
        return Some(ColorLevel::Extended);
    }

    let basic_prefix = ["screen", "xterm", "vt100"].iter().any(|p| term.starts_with(p));
    let basic_word = ["color", "ansi", "cygwin", "linux"].iter().any(|w| term.contains(w));
    if basic_prefix || basic_word {
        return Some(ColorLevel::Basic);
    }

    if term == "dumb" {
        return Some(ColorLevel::None);
    }

    None
}
