//! Snapshot of the process environment used for detection.
//!
//! Detection never reads process-global state directly. It works on an
//! [`Environment`] captured once, which keeps resolution pure and lets
//! tests describe a terminal without touching the real environment.

use crossterm::tty::IsTty;
use std::collections::HashMap;

/// Environment variables plus the TTY status of standard output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
    stdout_is_tty: bool,
}

impl Environment {
    /// Create an empty environment.
    #[must_use]
    pub fn new(stdout_is_tty: bool) -> Self {
        Self {
            vars: HashMap::new(),
            stdout_is_tty,
        }
    }

    /// Build an environment from name/value pairs.
    pub fn from_vars<I, K, V>(vars: I, stdout_is_tty: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            stdout_is_tty,
        }
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn capture() -> Self {
        let vars: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        let stdout_is_tty = std::io::stdout().is_tty();

        log::debug!("Captured {} environment variables (stdout tty: {})", vars.len(), stdout_is_tty);

        Self { vars, stdout_is_tty }
    }

    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Look up a variable. Unset and empty variables both yield `None`.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn stdout_is_tty(&self) -> bool {
        self.stdout_is_tty
    }
}
