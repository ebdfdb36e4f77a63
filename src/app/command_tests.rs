// Author: Cinnamon Screensaver contributors
// License: MIT

use std::ffi::OsString;
use std::io;
use std::sync::{Arc, Mutex};

use clap::Parser;

use crate::app::command::{Host, perform_action, run};
use crate::cli::Args;
use crate::core::action::{Action, Invocation, Status};
use crate::core::error::{SettingsError, SpawnError};
use crate::services::dbus::ScreenSaverService;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Settings,
    Spawn(Vec<String>),
    Connect,
    Quit,
    GetActive,
    GetActiveTime,
    Lock(String),
    SetActive(bool),
}

type Log = Arc<Mutex<Vec<Call>>>;

struct FakeService {
    log: Log,
    active: bool,
    active_time: u32,
    fail_calls: bool,
}

impl FakeService {
    fn record(&self, call: Call) -> zbus::Result<()> {
        self.log.lock().unwrap().push(call);
        if self.fail_calls {
            return Err(zbus::Error::Failure("daemon exploded".into()));
        }
        Ok(())
    }
}

impl ScreenSaverService for FakeService {
    async fn quit(&self) -> zbus::Result<()> {
        self.record(Call::Quit)
    }

    async fn get_active(&self) -> zbus::Result<bool> {
        self.record(Call::GetActive).map(|_| self.active)
    }

    async fn get_active_time(&self) -> zbus::Result<u32> {
        self.record(Call::GetActiveTime).map(|_| self.active_time)
    }

    async fn lock(&self, message: &str) -> zbus::Result<()> {
        self.record(Call::Lock(message.to_string()))
    }

    async fn set_active(&self, active: bool) -> zbus::Result<()> {
        self.record(Call::SetActive(active))
    }
}

struct FakeHost {
    log: Log,
    wayland: Option<OsString>,
    custom_saver: String,
    settings_broken: bool,
    spawn_errno: Option<i32>,
    connect_errno: Option<i32>,
    active: bool,
    active_time: u32,
    fail_calls: bool,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            wayland: None,
            custom_saver: String::new(),
            settings_broken: false,
            spawn_errno: None,
            connect_errno: None,
            active: false,
            active_time: 0,
            fail_calls: false,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }
}

impl Host for FakeHost {
    type Service = FakeService;

    fn wayland_display(&self) -> Option<OsString> {
        self.wayland.clone()
    }

    async fn custom_screensaver(&self) -> Result<String, SettingsError> {
        self.log.lock().unwrap().push(Call::Settings);
        if self.settings_broken {
            return Err(SettingsError::Rejected(
                "No such schema \u{201c}org.cinnamon.desktop.screensaver\u{201d}".into(),
            ));
        }
        Ok(self.custom_saver.clone())
    }

    fn spawn(&self, argv: &[String]) -> Result<(), SpawnError> {
        self.log.lock().unwrap().push(Call::Spawn(argv.to_vec()));
        match self.spawn_errno {
            Some(errno) => Err(SpawnError::Io(io::Error::from_raw_os_error(errno))),
            None => Ok(()),
        }
    }

    async fn connect(&self) -> zbus::Result<FakeService> {
        self.log.lock().unwrap().push(Call::Connect);
        if let Some(errno) = self.connect_errno {
            return Err(zbus::Error::InputOutput(Arc::new(io::Error::from_raw_os_error(errno))));
        }
        Ok(FakeService {
            log: self.log.clone(),
            active: self.active,
            active_time: self.active_time,
            fail_calls: self.fail_calls,
        })
    }
}

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("cinnamon-screensaver-command").chain(argv.iter().copied()))
        .unwrap()
}

async fn invoke(host: &FakeHost, argv: &[&str]) -> (eyre::Result<Status>, String) {
    let mut out = Vec::new();
    let res = run(&args(argv), host, &mut out).await;
    (res, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn no_action_prints_help_and_touches_nothing() {
    let host = FakeHost::new();
    let (res, out) = invoke(&host, &[]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert!(out.contains("--away-message"));
    assert!(out.contains("Usage"));
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn version_short_circuits_everything() {
    let mut host = FakeHost::new();
    host.wayland = Some(OsString::from("wayland-0"));
    host.custom_saver = "slock".into();

    let (res, out) = invoke(&host, &["-V"]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, format!("cinnamon-screensaver {}\n", env!("CARGO_PKG_VERSION")));
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn wayland_guard_stops_before_settings() {
    let mut host = FakeHost::new();
    host.wayland = Some(OsString::from("wayland-1"));
    host.custom_saver = "slock".into();

    for flag in ["--lock", "--query", "--activate"] {
        let (res, out) = invoke(&host, &[flag]).await;
        assert_eq!(res.unwrap(), Status::Success);
        assert_eq!(out, "Cinnamon Screensaver is unavailable on Wayland.\n");
    }
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn empty_wayland_display_is_ignored() {
    let mut host = FakeHost::new();
    host.wayland = Some(OsString::new());
    host.active = true;

    let (res, out) = invoke(&host, &["-q"]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, "The screensaver is active\n");
}

#[tokio::test]
async fn custom_saver_is_split_and_spawned_for_lock_and_activate() {
    for flag in ["--lock", "--activate"] {
        let mut host = FakeHost::new();
        host.custom_saver = "foo -x 'bar baz'".into();

        let (res, out) = invoke(&host, &[flag]).await;

        assert_eq!(res.unwrap(), Status::Success);
        assert_eq!(out, "");
        assert_eq!(
            host.calls(),
            vec![
                Call::Settings,
                Call::Spawn(vec!["foo".into(), "-x".into(), "bar baz".into()]),
            ]
        );
    }
}

#[tokio::test]
async fn custom_saver_rejects_other_actions() {
    for flag in ["--exit", "--query", "--time", "--deactivate"] {
        let mut host = FakeHost::new();
        host.custom_saver = "slock".into();

        let (res, out) = invoke(&host, &[flag]).await;

        assert_eq!(res.unwrap(), Status::Success);
        assert_eq!(out, "Action not supported with custom screensaver.\n");
        assert_eq!(host.calls(), vec![Call::Settings]);
    }
}

#[tokio::test]
async fn custom_saver_spawn_failure_is_reported_not_fatal() {
    let mut host = FakeHost::new();
    host.custom_saver = "no-such-locker --now".into();
    host.spawn_errno = Some(2);

    let (res, out) = invoke(&host, &["-l"]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert!(out.starts_with("Error 2 running no-such-locker --now: "), "{out}");
    assert!(!out.contains("os error"));
    assert!(!host.calls().contains(&Call::Connect));
}

#[tokio::test]
async fn custom_saver_with_bad_quoting_is_reported() {
    let mut host = FakeHost::new();
    host.custom_saver = "slock 'oops".into();

    let (res, out) = invoke(&host, &["-a"]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert!(out.starts_with("Error -1 running slock 'oops: "), "{out}");
    assert_eq!(host.calls(), vec![Call::Settings]);
}

#[tokio::test]
async fn whitespace_custom_saver_still_bypasses_daemon() {
    let mut host = FakeHost::new();
    host.custom_saver = "   ".into();

    let (res, out) = invoke(&host, &["-a"]).await;
    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, "Error -1 running    : empty command\n");

    let (res, out) = invoke(&host, &["--query"]).await;
    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, "Action not supported with custom screensaver.\n");

    assert!(!host.calls().contains(&Call::Connect));
    assert!(!host.calls().iter().any(|c| matches!(c, Call::Spawn(_))));
}

#[tokio::test]
async fn unreadable_settings_fall_back_to_daemon() {
    let mut host = FakeHost::new();
    host.settings_broken = true;
    host.active_time = 3;

    let (res, out) = invoke(&host, &["--time"]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, "The screensaver has been active for 3 seconds.\n");
    assert_eq!(
        host.calls(),
        vec![Call::Settings, Call::Connect, Call::GetActiveTime]
    );
}

#[tokio::test]
async fn connection_failure_reports_and_skips_action() {
    let mut host = FakeHost::new();
    host.connect_errno = Some(111);

    let (res, out) = invoke(&host, &["--lock"]).await;

    assert_eq!(res.unwrap(), Status::Failure);
    assert!(out.starts_with("Can't connect to screensaver: 111 - "), "{out}");
    assert_eq!(host.calls(), vec![Call::Settings, Call::Connect]);
}

#[tokio::test]
async fn remote_failure_propagates() {
    let mut host = FakeHost::new();
    host.fail_calls = true;

    let (res, out) = invoke(&host, &["--query"]).await;

    let err = res.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<zbus::Error>(),
        Some(zbus::Error::Failure(msg)) if msg == "daemon exploded"
    ));
    assert_eq!(out, "");
}

#[tokio::test]
async fn query_reports_both_states() {
    let mut host = FakeHost::new();
    let (_, out) = invoke(&host, &["--query"]).await;
    assert_eq!(out, "The screensaver is inactive\n");

    host.active = true;
    let (_, out) = invoke(&host, &["--query"]).await;
    assert_eq!(out, "The screensaver is active\n");
}

#[tokio::test]
async fn time_reports_zero_one_and_many() {
    let mut host = FakeHost::new();

    host.active_time = 0;
    let (_, out) = invoke(&host, &["-t"]).await;
    assert_eq!(out, "The screensaver is not currently active.\n");

    host.active_time = 1;
    let (_, out) = invoke(&host, &["-t"]).await;
    assert_eq!(out, "The screensaver has been active for 1 second.\n");

    host.active_time = 125;
    let (res, out) = invoke(&host, &["--time"]).await;
    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, "The screensaver has been active for 125 seconds.\n");
}

#[tokio::test]
async fn lock_passes_away_message_verbatim() {
    let host = FakeHost::new();
    let (res, out) = invoke(&host, &["--lock", "-m", "Be right back"]).await;

    assert_eq!(res.unwrap(), Status::Success);
    assert_eq!(out, "");
    assert_eq!(
        host.calls(),
        vec![
            Call::Settings,
            Call::Connect,
            Call::Lock("Be right back".into())
        ]
    );
}

#[tokio::test]
async fn lock_without_message_sends_empty_string() {
    let host = FakeHost::new();
    let _ = invoke(&host, &["-l"]).await;
    assert!(host.calls().contains(&Call::Lock(String::new())));
}

#[tokio::test]
async fn each_daemon_action_makes_exactly_one_call() {
    let cases = [
        ("-e", Call::Quit),
        ("-q", Call::GetActive),
        ("-t", Call::GetActiveTime),
        ("-l", Call::Lock(String::new())),
        ("-a", Call::SetActive(true)),
        ("-d", Call::SetActive(false)),
    ];

    for (flag, expected) in cases {
        let host = FakeHost::new();
        let _ = invoke(&host, &[flag]).await;
        assert_eq!(
            host.calls(),
            vec![Call::Settings, Call::Connect, expected],
            "{flag}"
        );
    }
}

#[tokio::test]
async fn perform_action_answers_version_directly() {
    let host = FakeHost::new();
    let service = host.connect().await.unwrap();
    let mut out = Vec::new();

    perform_action(&service, &Invocation::new(Action::Version, ""), &mut out)
        .await
        .unwrap();

    assert!(String::from_utf8(out).unwrap().starts_with("cinnamon-screensaver "));
    assert_eq!(host.calls(), vec![Call::Connect]);
}
