// Author: Cinnamon Screensaver contributors
// License: MIT

/// The one operation requested per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ask the daemon to exit gracefully.
    Exit,

    /// Report whether the screensaver is active.
    Query,

    /// Report how long the screensaver has been active.
    Time,

    /// Lock the screen immediately, with an optional away message.
    Lock,

    /// Blank the screen.
    Activate,

    /// Un-blank the screen if it is active.
    Deactivate,

    /// Print the program version.
    Version,
}

impl Action {
    /// Only these actions can be forwarded to a custom screensaver command.
    pub fn supports_custom_saver(self) -> bool {
        matches!(self, Action::Lock | Action::Activate)
    }
}

/// A resolved command line: read once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    /// Only meaningful for [`Action::Lock`].
    pub message: String,
}

impl Invocation {
    pub fn new(action: Action, message: impl Into<String>) -> Self {
        Self {
            action,
            message: message.into(),
        }
    }
}

/// Process exit status contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Dispatch succeeded, or help/version/guard/custom-saver path.
    Success = 0,
    /// Connection to the daemon failed, or a remote call failed.
    Failure = 1,
    /// Bad command line: conflicting or misplaced flags.
    Usage = 2,
}

impl From<Status> for std::process::ExitCode {
    fn from(status: Status) -> Self {
        std::process::ExitCode::from(status as u8)
    }
}
