// Author: Cinnamon Screensaver contributors
// License: MIT

pub mod dbus;
pub mod settings;
pub mod spawn;
