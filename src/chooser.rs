//! Interactive chooser
//!
//! Hands the menu to a dmenu-style program (wofi by default) on stdin and
//! reads the chosen line back from stdout. Cancelling the chooser makes it exit
//! non-zero, which aborts the run.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::SinkError;

/// Lets the user pick one line of a menu
pub trait Chooser {
    /// Present `menu` and return the chosen line, trimmed
    ///
    /// # Errors
    /// Returns [`SinkError::CommandFailed`] if the chooser cannot run, exits
    /// non-zero, or its stdin cannot be written.
    fn choose(&self, menu: &str) -> Result<String, SinkError>;
}

/// Any program following the dmenu protocol: menu on stdin, choice on stdout
#[derive(Debug, Clone)]
pub struct DmenuChooser {
    program: String,
    args: Vec<String>,
}

impl DmenuChooser {
    /// Build a chooser from a full command line (`program arg...`)
    ///
    /// Returns `None` for an empty command line.
    #[must_use]
    pub fn from_command_line(command_line: &[String]) -> Option<Self> {
        let (program, args) = command_line.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn failure(&self, reason: String) -> SinkError {
        SinkError::CommandFailed {
            command: self.program.clone(),
            reason,
        }
    }
}

impl Chooser for DmenuChooser {
    fn choose(&self, menu: &str) -> Result<String, SinkError> {
        trace!("Running {} {}", self.program, self.args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failure(format!("could not be started: {e}")))?;

        // Dropping stdin at the end of the block closes the pipe so the chooser sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(menu.as_bytes())
                .map_err(|e| self.failure(format!("failed to write menu: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| self.failure(format!("failed to read choice: {e}")))?;

        if !output.status.success() {
            return Err(SinkError::from_output(&self.program, &output));
        }

        let choice = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Chooser returned {choice:?}");
        Ok(choice)
    }
}
