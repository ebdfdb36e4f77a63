// Author: Cinnamon Screensaver contributors
// License: MIT

use std::ffi::OsString;
use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use signal_hook::consts::SIGINT;

pub const WAYLAND_NOTICE: &str = "Cinnamon Screensaver is unavailable on Wayland.";

// ---------------- wayland check ----------------

pub fn wayland_display() -> Option<OsString> {
    std::env::var_os("WAYLAND_DISPLAY")
}

/// A non-empty `WAYLAND_DISPLAY` means the daemon cannot be running.
pub fn wayland_active(display: Option<OsString>) -> bool {
    display.is_some_and(|d| !d.is_empty())
}

// ---------------- signals ----------------

/// Ctrl+C must terminate us the default way, even while blocked on the bus.
pub fn reset_interrupt_handler() -> io::Result<()> {
    let always = Arc::new(AtomicBool::new(true));
    signal_hook::flag::register_conditional_default(SIGINT, always)?;
    Ok(())
}
