//! Mistake accounting and the process exit status.

/// Counters accumulated over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    mistakes: usize,
}

impl RunState {
    /// Count findings from one line. Verbosity never affects this.
    pub fn record(&mut self, findings: usize) {
        self.mistakes += findings;
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Status of a run that reached end of input.
    pub fn exit_status(&self) -> ExitStatus {
        if self.mistakes == 0 {
            ExitStatus::Clean
        } else {
            ExitStatus::Mistakes
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Completed, no mistakes; also help and version.
    Clean,
    /// Completed with at least one mistake.
    Mistakes,
    /// Malformed invocation.
    Usage,
    /// Stream or engine failure.
    Fatal,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Mistakes | ExitStatus::Usage => 1,
            ExitStatus::Fatal => 127,
        }
    }
}
