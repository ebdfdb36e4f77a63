// Author: Cinnamon Screensaver contributors
// License: MIT

use zbus::proxy::CacheProperties;
use zbus::{Connection, proxy};

use crate::sdebug;

pub const SS_SERVICE: &str = "org.cinnamon.ScreenSaver";
pub const SS_PATH: &str = "/org/cinnamon/ScreenSaver";

#[proxy(
    interface = "org.cinnamon.ScreenSaver",
    default_service = "org.cinnamon.ScreenSaver",
    default_path = "/org/cinnamon/ScreenSaver",
    gen_blocking = false
)]
pub trait ScreenSaver {
    fn quit(&self) -> zbus::Result<()>;

    fn get_active(&self) -> zbus::Result<bool>;

    fn get_active_time(&self) -> zbus::Result<u32>;

    fn lock(&self, message: &str) -> zbus::Result<()>;

    fn set_active(&self, value: bool) -> zbus::Result<()>;
}

/// The remote operations the command dispatcher needs.
///
/// Implemented by the generated D-Bus proxy; tests substitute a recorder.
pub trait ScreenSaverService {
    async fn quit(&self) -> zbus::Result<()>;
    async fn get_active(&self) -> zbus::Result<bool>;
    async fn get_active_time(&self) -> zbus::Result<u32>;
    async fn lock(&self, message: &str) -> zbus::Result<()>;
    async fn set_active(&self, active: bool) -> zbus::Result<()>;
}

impl ScreenSaverService for ScreenSaverProxy<'static> {
    async fn quit(&self) -> zbus::Result<()> {
        ScreenSaverProxy::quit(self).await
    }

    async fn get_active(&self) -> zbus::Result<bool> {
        ScreenSaverProxy::get_active(self).await
    }

    async fn get_active_time(&self) -> zbus::Result<u32> {
        ScreenSaverProxy::get_active_time(self).await
    }

    async fn lock(&self, message: &str) -> zbus::Result<()> {
        ScreenSaverProxy::lock(self, message).await
    }

    async fn set_active(&self, active: bool) -> zbus::Result<()> {
        ScreenSaverProxy::set_active(self, active).await
    }
}

/// Open the session bus and bind a proxy to the screensaver daemon.
pub async fn connect() -> zbus::Result<ScreenSaverProxy<'static>> {
    let conn = Connection::session().await?;
    sdebug!("D-Bus", "session bus connected; binding {} at {}", SS_SERVICE, SS_PATH);

    ScreenSaverProxy::builder(&conn)
        .cache_properties(CacheProperties::No)
        .build()
        .await
}

/// Numeric or symbolic code for a bus error: errno for I/O failures,
/// the D-Bus error name for method errors, `-1` otherwise.
pub fn error_code(err: &zbus::Error) -> String {
    match err {
        zbus::Error::InputOutput(io) => io
            .raw_os_error()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-1".to_string()),
        zbus::Error::MethodError(name, _, _) => name.as_str().to_string(),
        _ => "-1".to_string(),
    }
}
