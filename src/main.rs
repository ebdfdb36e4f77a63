// Author: Cinnamon Screensaver contributors
// License: MIT

mod app;
mod cli;
mod core;
mod log;
mod services;

use std::process::ExitCode;

use clap::Parser;

use crate::core::action::Status;

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    app::platform::reset_interrupt_handler()?;

    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let status = if e.use_stderr() {
                Status::Usage
            } else {
                Status::Success
            };
            let _ = e.print();
            return Ok(status.into());
        }
    };

    log::init(log::default_log_path());

    let status = app::command::run(&args, &app::command::SystemHost, &mut std::io::stdout()).await?;
    Ok(status.into())
}
