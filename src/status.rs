use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// Outcome of the most recent reaped process, shared by foreground waits
/// and background completions alike.
///
/// Rendered exactly as the shell reports it: `exit value N` for a normal
/// exit, `terminated by signal N` for a signal death. The `status` built-in
/// prints this verbatim, and the background-completion messages embed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastStatus {
    Exited(i32),
    Signaled(i32),
}

impl Default for LastStatus {
    /// A fresh shell reports `exit value 0` before anything has run.
    fn default() -> Self {
        LastStatus::Exited(0)
    }
}

impl LastStatus {
    /// Translate a wait outcome. A status with neither an exit code nor a
    /// termination signal cannot occur for a process observed via `wait`,
    /// but map it to a plain failure rather than panicking.
    pub fn from_wait(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return LastStatus::Exited(code);
        }
        if let Some(signal) = status.signal() {
            return LastStatus::Signaled(signal);
        }
        LastStatus::Exited(1)
    }
}

impl fmt::Display for LastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastStatus::Exited(code) => write!(f, "exit value {code}"),
            LastStatus::Signaled(signal) => write!(f, "terminated by signal {signal}"),
        }
    }
}
