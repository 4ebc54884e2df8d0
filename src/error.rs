//! Typed failure conditions
//!
//! [`SinkError`] covers everything the parsing and reconciliation core can
//! report, plus failures of the external tools it drives. The command layer
//! wraps these in `color_eyre` reports with extra context.

use thiserror::Error;

/// Errors produced while turning a status snapshot into a sink selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// A sink line had a non-numeric identifier region.
    #[error("malformed sink identifier in line: {line:?}")]
    MalformedSinkIdentifier {
        /// The offending line, after volume truncation.
        line: String,
    },
    /// No parsable sinks were found in the status output.
    #[error("no sinks found in wpctl status output")]
    EmptySinkList,
    /// The chooser returned a line that matches no known sink.
    #[error("no sink matches the chosen entry {choice:?}")]
    NoMatchingSink {
        /// The trimmed text the chooser returned.
        choice: String,
    },
    /// An external tool could not be started or exited unsuccessfully.
    #[error("'{command}' failed: {reason}")]
    CommandFailed {
        /// Program name, e.g. `wpctl`.
        command: String,
        /// Spawn error or trimmed stderr.
        reason: String,
    },
}

impl SinkError {
    /// Build a [`SinkError::CommandFailed`] from a finished process.
    pub(crate) fn from_output(command: &str, output: &std::process::Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let reason = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            format!("exited with {}: {stderr}", output.status)
        };
        Self::CommandFailed {
            command: command.to_string(),
            reason,
        }
    }
}
