//! Strategies for handing a URL to the host's default browser.

use crate::error::{LauncherError, Result};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// Something that can open a URL and report how it went.
///
/// [`SystemOpener`] is the real implementation; tests substitute a fake so no
/// browser is ever started.
pub trait UrlOpener {
    /// Open `url` and return the exit code of whatever did the opening.
    fn open(&self, url: &str) -> Result<ExitCode>;
}

/// Operating system family, which decides the browser-launch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other unix-like target.
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Command word that opens a URL on this platform.
    pub fn command_prefix(self) -> &'static str {
        match self {
            Platform::Windows => "start",
            Platform::MacOs => "open",
            Platform::Linux => "xdg-open",
        }
    }

    /// Build the launch command for `url`.
    ///
    /// The URL is passed as a single argument, never through `sh -c`. On
    /// Windows `start` is a `cmd.exe` builtin, so it runs as
    /// `cmd /C start "" <url>` and `cmd` still interprets metacharacters such
    /// as `&` inside the URL.
    pub fn command(self, url: &str) -> Command {
        match self {
            Platform::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", self.command_prefix(), "", url]);
                cmd
            }
            Platform::MacOs | Platform::Linux => {
                let mut cmd = Command::new(self.command_prefix());
                cmd.arg(url);
                cmd
            }
        }
    }
}

/// Opens URLs by spawning an external process and waiting for it to exit.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    platform: Platform,
    program: Option<String>,
}

impl SystemOpener {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            program: None,
        }
    }

    /// Run `program <url>` instead of the platform's default command.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            platform: Platform::current(),
            program: Some(program.into()),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The command that [`UrlOpener::open`] will run for `url`.
    pub fn command(&self, url: &str) -> Command {
        match &self.program {
            Some(program) => {
                let mut cmd = Command::new(program);
                cmd.arg(url);
                cmd
            }
            None => self.platform.command(url),
        }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<ExitCode> {
        let mut cmd = self.command(url);
        let program = cmd.get_program().to_string_lossy().into_owned();
        debug!(%program, %url, "spawning url opener");

        let status = cmd
            .status()
            .map_err(|source| LauncherError::Spawn { program, source })?;
        let code = exit_code(status);
        debug!(code, "url opener exited");
        Ok(code)
    }
}

/// Shell-style exit code: the process's own code, else `128 + signal` for a
/// signal death (255 for a bare core dump). `-1` when neither is known.
fn exit_code(status: ExitStatus) -> ExitCode {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        match status.signal() {
            Some(signal) => 128 + signal,
            None if status.core_dumped() => 255,
            None => -1,
        }
    }
    #[cfg(not(unix))]
    {
        -1
    }
}
