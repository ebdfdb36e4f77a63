// Author: Cinnamon Screensaver contributors
// License: MIT

use std::process::Stdio;

use shell_words::split as shell_split;
use tokio::process::Command;

use crate::core::error::SpawnError;
use crate::sdebug;

/// Split a command line with POSIX shell quoting rules.
pub fn split_command(command: &str) -> Result<Vec<String>, SpawnError> {
    let argv = shell_split(command).map_err(|e| SpawnError::Parse(e.to_string()))?;
    match argv.first() {
        Some(program) if !program.is_empty() => Ok(argv),
        _ => Err(SpawnError::Empty),
    }
}

/// Start `argv` detached: stdin is closed, the child gets its own process
/// group, and nobody waits for it.
pub fn spawn_detached(argv: &[String]) -> Result<u32, SpawnError> {
    let (program, args) = argv.split_first().ok_or(SpawnError::Empty)?;

    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .process_group(0)
        .spawn()?;

    // Dropping the handle neither kills nor waits on the child.
    let pid = child.id().unwrap_or(0);
    sdebug!("Spawn", "started {:?} as pid {}", argv, pid);
    Ok(pid)
}
