use std::process::ExitCode;

/// How an autoref command ended.
///
/// `Failure` means there was nothing to do: no header matched the input selection, the
/// `dump` target was skipped, or `init` found an existing config. Config, I/O and
/// argument problems surface as `Error` from `main`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every selected header was extracted (and written, for `export`).
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}
