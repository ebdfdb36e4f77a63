// Author: Cinnamon Screensaver contributors
// License: MIT

use clap::{ArgGroup, Parser};

use crate::core::action::{Action, Invocation};

#[derive(Parser, Debug)]
#[command(
    name = "cinnamon-screensaver-command",
    about = "Cinnamon Screensaver Command",
    disable_version_flag = true
)]
#[command(group(
    ArgGroup::new("action")
        .args(["exit", "query", "time", "lock", "activate", "deactivate", "version"])
        .multiple(false)
))]
pub struct Args {
    #[arg(short, long, help = "Causes the screensaver to exit gracefully")]
    pub exit: bool,

    #[arg(short, long, help = "Query the state of the screensaver")]
    pub query: bool,

    #[arg(
        short,
        long,
        help = "Query the length of time the screensaver has been active"
    )]
    pub time: bool,

    #[arg(
        short,
        long,
        help = "Tells the running screensaver process to lock the screen immediately"
    )]
    pub lock: bool,

    #[arg(short, long, help = "Turn the screensaver on (blank the screen)")]
    pub activate: bool,

    #[arg(
        short,
        long,
        help = "If the screensaver is active then deactivate it (un-blank the screen)"
    )]
    pub deactivate: bool,

    #[arg(short = 'V', long, help = "Version of this application")]
    pub version: bool,

    #[arg(
        short = 'm',
        long,
        value_name = "MESSAGE",
        requires = "lock",
        help = "Message to be displayed in lock screen"
    )]
    pub away_message: Option<String>,
}

impl Args {
    /// The selected action flag. The argument group guarantees at most one.
    pub fn action(&self) -> Option<Action> {
        [
            (self.exit, Action::Exit),
            (self.query, Action::Query),
            (self.time, Action::Time),
            (self.lock, Action::Lock),
            (self.activate, Action::Activate),
            (self.deactivate, Action::Deactivate),
            (self.version, Action::Version),
        ]
        .into_iter()
        .find_map(|(set, action)| set.then_some(action))
    }

    pub fn invocation(&self) -> Option<Invocation> {
        let action = self.action()?;
        Some(Invocation::new(
            action,
            self.away_message.clone().unwrap_or_default(),
        ))
    }
}

pub fn version_line() -> String {
    format!("cinnamon-screensaver {}", env!("CARGO_PKG_VERSION"))
}
