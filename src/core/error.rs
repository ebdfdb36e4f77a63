// Author: Cinnamon Screensaver contributors
// License: MIT

use std::fmt;
use std::io;

/// Failure to start a custom screensaver command.
#[derive(Debug)]
pub enum SpawnError {
    /// The command string has unbalanced quotes or a dangling escape.
    Parse(String),

    /// Word splitting produced no program name.
    Empty,

    /// The OS refused to start the process.
    Io(io::Error),
}

impl SpawnError {
    /// OS error number, `-1` when the failure did not come from the OS.
    pub fn code(&self) -> i32 {
        match self {
            SpawnError::Io(e) => e.raw_os_error().unwrap_or(-1),
            SpawnError::Parse(_) | SpawnError::Empty => -1,
        }
    }

    /// Error text without the `(os error N)` suffix std appends.
    pub fn message(&self) -> String {
        match self {
            SpawnError::Io(e) => strip_os_error_suffix(&e.to_string()).to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::Parse(msg) => write!(f, "cannot split command line: {msg}"),
            SpawnError::Empty => write!(f, "empty command"),
            SpawnError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SpawnError {}

impl From<io::Error> for SpawnError {
    fn from(err: io::Error) -> Self {
        SpawnError::Io(err)
    }
}

/// Failure to read the custom screensaver setting.
#[derive(Debug)]
pub enum SettingsError {
    /// `gsettings` could not be run at all.
    Unavailable(io::Error),

    /// `gsettings` ran but reported an error (e.g. unknown schema).
    Rejected(String),

    /// The printed value was not a GVariant string literal.
    Malformed(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Unavailable(e) => write!(f, "gsettings unavailable: {e}"),
            SettingsError::Rejected(msg) => write!(f, "gsettings failed: {msg}"),
            SettingsError::Malformed(raw) => write!(f, "unexpected gsettings output: {raw}"),
        }
    }
}

impl std::error::Error for SettingsError {}

fn strip_os_error_suffix(text: &str) -> &str {
    match text.rfind(" (os error ") {
        Some(idx) if text.ends_with(')') => &text[..idx],
        _ => text,
    }
}
