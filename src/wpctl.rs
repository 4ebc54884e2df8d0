//! `WirePlumber` integration
//!
//! Reads the sink snapshot and applies the new default via `wpctl`:
//! - `wpctl status`: tree-drawn status dump, parsed by [`crate::status`]
//! - `wpctl set-default <id>`: makes the given node the default sink
//!
//! `wpctl` must be in `PATH`; its presence is not checked up front.

use std::process::Command;

use tracing::{debug, trace};

use crate::error::SinkError;

/// Status source and state-setter for audio sinks
pub trait AudioControl {
    /// Full text of the current status snapshot
    ///
    /// # Errors
    /// Returns [`SinkError::CommandFailed`] if the tool cannot run or fails.
    fn status(&self) -> Result<String, SinkError>;

    /// Make the sink with the given identifier the default
    ///
    /// # Errors
    /// Returns [`SinkError::CommandFailed`] if the tool cannot run or fails.
    fn set_default(&self, id: u32) -> Result<(), SinkError>;
}

/// `wpctl` command-line interface
#[derive(Debug, Clone)]
pub struct Wpctl {
    program: String,
}

impl Wpctl {
    /// Use the given `wpctl` executable (name or path)
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<std::process::Output, SinkError> {
        trace!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| SinkError::CommandFailed {
                command: self.program.clone(),
                reason: format!("could not be started: {e}"),
            })?;

        if !output.status.success() {
            return Err(SinkError::from_output(&self.program, &output));
        }

        Ok(output)
    }
}

impl Default for Wpctl {
    fn default() -> Self {
        Self::new("wpctl")
    }
}

impl AudioControl for Wpctl {
    fn status(&self) -> Result<String, SinkError> {
        let output = self.run(&["status"])?;
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!("wpctl status returned {} bytes", text.len());
        Ok(text)
    }

    fn set_default(&self, id: u32) -> Result<(), SinkError> {
        self.run(&["set-default", &id.to_string()])?;
        debug!("Set default sink: {}", id);
        Ok(())
    }
}
