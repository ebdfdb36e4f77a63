// Author: Cinnamon Screensaver contributors
// License: MIT

use std::ffi::OsString;
use std::io::Write;

use clap::CommandFactory;

use crate::app::{custom_saver, platform};
use crate::cli::{Args, version_line};
use crate::core::action::{Action, Invocation, Status};
use crate::core::error::{SettingsError, SpawnError};
use crate::core::i18n::{self, MessageId};
use crate::services::dbus::{self, ScreenSaverProxy, ScreenSaverService};
use crate::services::{settings, spawn};
use crate::{serror, sinfo, swarn};

/// Everything the dispatcher needs from the outside world.
pub trait Host {
    type Service: ScreenSaverService;

    fn wayland_display(&self) -> Option<OsString>;

    /// Configured custom screensaver command, "" when none.
    async fn custom_screensaver(&self) -> Result<String, SettingsError>;

    fn spawn(&self, argv: &[String]) -> Result<(), SpawnError>;

    async fn connect(&self) -> zbus::Result<Self::Service>;
}

/// The real environment, settings store, process table and session bus.
pub struct SystemHost;

impl Host for SystemHost {
    type Service = ScreenSaverProxy<'static>;

    fn wayland_display(&self) -> Option<OsString> {
        platform::wayland_display()
    }

    async fn custom_screensaver(&self) -> Result<String, SettingsError> {
        settings::get_custom_screensaver().await
    }

    fn spawn(&self, argv: &[String]) -> Result<(), SpawnError> {
        spawn::spawn_detached(argv).map(|_| ())
    }

    async fn connect(&self) -> zbus::Result<Self::Service> {
        dbus::connect().await
    }
}

/// Resolve and carry out one invocation, writing the user-visible line to `out`.
///
/// Remote call failures are returned as-is; every other failure is
/// reported on `out` and mapped to a [`Status`].
pub async fn run<H: Host>(args: &Args, host: &H, out: &mut impl Write) -> eyre::Result<Status> {
    let Some(invocation) = args.invocation() else {
        write!(out, "{}", Args::command().render_help())?;
        return Ok(Status::Success);
    };

    if invocation.action == Action::Version {
        writeln!(out, "{}", version_line())?;
        return Ok(Status::Success);
    }

    if platform::wayland_active(host.wayland_display()) {
        writeln!(out, "{}", platform::WAYLAND_NOTICE)?;
        return Ok(Status::Success);
    }

    let custom = host.custom_screensaver().await.unwrap_or_else(|e| {
        swarn!("Settings", "treating custom screensaver as unset: {}", e);
        String::new()
    });
    if !custom.is_empty() {
        custom_saver::handle(host, &custom, invocation.action, out)?;
        return Ok(Status::Success);
    }

    let proxy = match host.connect().await {
        Ok(p) => p,
        Err(e) => {
            serror!("D-Bus", "connect failed: {:?}", e);
            writeln!(
                out,
                "Can't connect to screensaver: {} - {}",
                dbus::error_code(&e),
                e
            )?;
            return Ok(Status::Failure);
        }
    };

    if let Err(e) = perform_action(&proxy, &invocation, out).await {
        serror!("D-Bus", "{:?} failed: {}", invocation.action, e);
        return Err(e);
    }

    sinfo!("D-Bus", "{:?} done", invocation.action);
    Ok(Status::Success)
}

/// Issue the single remote call for `invocation`.
pub async fn perform_action<S: ScreenSaverService>(
    proxy: &S,
    invocation: &Invocation,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let tr = i18n::catalog();

    match invocation.action {
        Action::Exit => proxy.quit().await?,

        Action::Query => {
            let id = if proxy.get_active().await? {
                MessageId::ScreensaverActive
            } else {
                MessageId::ScreensaverInactive
            };
            writeln!(out, "{}", tr.text(id))?;
        }

        Action::Time => {
            let seconds = proxy.get_active_time().await?;
            if seconds == 0 {
                writeln!(out, "{}", tr.text(MessageId::NotCurrentlyActive))?;
            } else {
                writeln!(
                    out,
                    "{}",
                    tr.plural(MessageId::ActiveForSeconds, u64::from(seconds))
                )?;
            }
        }

        Action::Lock => proxy.lock(&invocation.message).await?,

        Action::Activate => proxy.set_active(true).await?,

        Action::Deactivate => proxy.set_active(false).await?,

        // Short-circuited in `run`; kept so direct callers still get an answer.
        Action::Version => writeln!(out, "{}", version_line())?,
    }

    Ok(())
}
