/// Running the fetch routine as a child process.
use std::path::Path;
use std::process::{Command, Stdio};

use super::FetchError;

/// One invocation of the fetch routine: `<interpreter> <script> <username>`.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub interpreter: &'a str,
    pub script: &'a Path,
    pub username: &'a str,
}

impl Invocation<'_> {
    fn command(&self) -> Command {
        let mut cmd = Command::new(self.interpreter);
        cmd.arg(self.script)
            .arg(self.username)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the routine to completion and return its raw stdout.
    ///
    /// Blocks until the child exits. Its stderr goes straight to ours.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Subprocess` if the child cannot be spawned or
    /// exits unsuccessfully.
    pub fn run(&self) -> Result<Vec<u8>, FetchError> {
        log::debug!(
            "running {} {} {}",
            self.interpreter,
            self.script.display(),
            self.username
        );

        let output = self
            .command()
            .output()
            .map_err(|err| FetchError::Subprocess {
                cause: err.to_string(),
            })?;

        log::debug!(
            "child finished with {} ({} bytes on stdout)",
            output.status,
            output.stdout.len()
        );

        if !output.status.success() {
            return Err(FetchError::Subprocess {
                cause: output.status.to_string(),
            });
        }

        Ok(output.stdout)
    }
}
