// Author: Cinnamon Screensaver contributors
// License: MIT

pub mod command;
pub mod custom_saver;
pub mod platform;

#[cfg(test)]
mod command_tests;
