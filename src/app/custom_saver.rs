// Author: Cinnamon Screensaver contributors
// License: MIT

use std::io::{self, Write};

use crate::app::command::Host;
use crate::core::action::Action;
use crate::services::spawn::split_command;
use crate::{sinfo, swarn};

pub const UNSUPPORTED_NOTICE: &str = "Action not supported with custom screensaver.";

/// Forward `action` to the user's screensaver command instead of the daemon.
///
/// Every failure here is reported on `out` and swallowed.
pub fn handle<H: Host>(
    host: &H,
    custom_saver: &str,
    action: Action,
    out: &mut impl Write,
) -> io::Result<()> {
    if !action.supports_custom_saver() {
        sinfo!("Custom", "{:?} not forwarded to '{}'", action, custom_saver);
        return writeln!(out, "{UNSUPPORTED_NOTICE}");
    }

    let spawned = split_command(custom_saver).and_then(|argv| host.spawn(&argv));

    match spawned {
        Ok(()) => {
            sinfo!("Custom", "{:?} forwarded to '{}'", action, custom_saver);
            Ok(())
        }
        Err(e) => {
            swarn!("Custom", "failed to run '{}': {}", custom_saver, e);
            writeln!(
                out,
                "Error {} running {}: {}",
                e.code(),
                custom_saver,
                e.message()
            )
        }
    }
}
