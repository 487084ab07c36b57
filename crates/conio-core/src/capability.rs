//! Terminal capability detection.
//!
//! Decides whether an output stream can render ANSI escape sequences. The
//! decision is split into an [`Environment`] (environment variables, OS
//! version, platform predicate) and a [`ColorStrategy`] chosen at runtime from
//! the platform, so both the POSIX and Windows rules can be exercised from
//! tests with a fake environment.
//!
//! The "is a terminal" result for the stream is passed in by the caller as an
//! `Option<bool>`: `None` means the primitive is not available for that stream
//! (for example an arbitrary in-memory writer).

use std::env;

use regex::Regex;

/// First Windows 10 build with VT100 escape sequence support in the console.
pub const MIN_VT_WINDOWS_BUILD: u32 = 10586;

/// Source of the environment inputs consulted by the probe.
pub trait Environment {
    /// Look up an environment variable. Unset and non-unicode values are `None`.
    fn var(&self, key: &str) -> Option<String>;

    /// OS version string, used on Windows to find the build number.
    fn os_version(&self) -> Option<String>;

    /// Whether the process runs on the Windows family.
    fn is_windows(&self) -> bool;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    #[cfg(windows)]
    fn os_version(&self) -> Option<String> {
        // `ver` prints e.g. "Microsoft Windows [Version 10.0.19045.3570]"
        std::process::Command::new("cmd")
            .args(["/C", "ver"])
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|s| !s.is_empty())
    }

    #[cfg(not(windows))]
    fn os_version(&self) -> Option<String> {
        None
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }
}

/// Platform-specific rule deciding color support for a stream.
pub trait ColorStrategy {
    /// Decide color support. `tty` is never `Some(false)` here; the probe
    /// rejects non-terminal streams before consulting a strategy.
    fn supports_color(&self, env: &dyn Environment, tty: Option<bool>) -> bool;
}

/// Unix, Linux and macOS rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixStrategy;

impl ColorStrategy for PosixStrategy {
    fn supports_color(&self, env: &dyn Environment, tty: Option<bool>) -> bool {
        if let Some(is_tty) = tty {
            return is_tty;
        }

        // No terminal primitive for this stream: trust TERM
        match env.var("TERM") {
            Some(term) => !term.is_empty() && term != "dumb",
            None => false,
        }
    }
}

/// Windows rules: modern consoles by build number, legacy emulators by
/// their identifying variables.
#[derive(Debug, Clone)]
pub struct WindowsStrategy {
    build_re: Regex,
}

impl Default for WindowsStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowsStrategy {
    /// Create the strategy.
    pub fn new() -> Self {
        Self {
            build_re: Regex::new(r"(?i)(?:build\s+|version\s+\d+\.\d+\.)(\d+)")
                .expect("Invalid regex"),
        }
    }

    /// Extract the build number from an OS version string.
    ///
    /// Accepts both `"... build 19045 ..."` and `"[Version 10.0.19045.3570]"`.
    pub fn parse_build(&self, version: &str) -> Option<u32> {
        self.build_re
            .captures(version)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    fn has_terminal_hint(env: &dyn Environment) -> bool {
        env.var("ANSICON").is_some()
            || env.var("ConEmuANSI").as_deref() == Some("ON")
            || env.var("TERM").as_deref() == Some("xterm")
            || env.var("TERM_PROGRAM").as_deref() == Some("Hyper")
            || env.var("WT_SESSION").is_some()
    }
}

impl ColorStrategy for WindowsStrategy {
    fn supports_color(&self, env: &dyn Environment, _tty: Option<bool>) -> bool {
        let build = env.os_version().and_then(|v| self.parse_build(&v));
        if build.is_some_and(|b| b >= MIN_VT_WINDOWS_BUILD) {
            return true;
        }

        Self::has_terminal_hint(env)
    }
}

/// Decides whether ANSI styling should be emitted on a stream.
pub struct CapabilityProbe {
    env: Box<dyn Environment>,
}

impl std::fmt::Debug for CapabilityProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityProbe")
            .field("windows", &self.env.is_windows())
            .finish()
    }
}

impl Default for CapabilityProbe {
    fn default() -> Self {
        Self::system()
    }
}

impl CapabilityProbe {
    /// Probe backed by the real process environment.
    pub fn system() -> Self {
        Self::with_environment(SystemEnvironment)
    }

    /// Probe backed by a custom environment.
    pub fn with_environment(env: impl Environment + 'static) -> Self {
        Self { env: Box::new(env) }
    }

    /// The environment this probe reads from.
    pub fn environment(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// Check whether a stream supports ANSI colors.
    ///
    /// Rules:
    /// 1. A stream known not to be a terminal never gets colors
    /// 2. Windows: build >= 10586, or a known terminal emulator variable
    /// 3. POSIX: the terminal check, or `TERM` when no check is available
    pub fn supports_color(&self, tty: Option<bool>) -> bool {
        if tty == Some(false) {
            return false;
        }

        if self.env.is_windows() {
            WindowsStrategy::new().supports_color(self.env.as_ref(), tty)
        } else {
            PosixStrategy.supports_color(self.env.as_ref(), tty)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Environment;
    use std::collections::HashMap;

    /// In-memory environment for probe tests.
    #[derive(Debug, Clone, Default)]
    pub struct FakeEnvironment {
        pub vars: HashMap<String, String>,
        pub os_version: Option<String>,
        pub windows: bool,
    }

    impl FakeEnvironment {
        pub fn posix() -> Self {
            Self::default()
        }

        pub fn windows(os_version: Option<&str>) -> Self {
            Self {
                windows: true,
                os_version: os_version.map(str::to_string),
                ..Self::default()
            }
        }

        pub fn with_var(mut self, key: &str, value: &str) -> Self {
            self.vars.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Environment for FakeEnvironment {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned()
        }

        fn os_version(&self) -> Option<String> {
            self.os_version.clone()
        }

        fn is_windows(&self) -> bool {
            self.windows
        }
    }
}
