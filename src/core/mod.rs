// Author: Cinnamon Screensaver contributors
// License: MIT

pub mod action;
pub mod error;
pub mod i18n;
