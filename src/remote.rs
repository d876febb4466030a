use std::{
    io::{self, Write},
    process::{ExitCode, Output},
};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, trace};

/// Whatever `git remote get-url` produced, kept as raw bytes.
#[derive(Debug)]
pub struct RemoteUrl {
    output: Output,
}

impl RemoteUrl {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        out.write_all(&self.output.stdout)?;
        out.flush()?;
        err.write_all(&self.output.stderr)?;
        err.flush()
    }

    /// git's exit code, or 1 when it has none that fits (killed by a signal).
    pub fn code(&self) -> u8 {
        self.output
            .status
            .code()
            .and_then(|code| u8::try_from(code).ok())
            .unwrap_or(1)
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<Output> for RemoteUrl {
    fn from(output: Output) -> Self {
        Self { output }
    }
}

/// Shell-style status for a git binary that could not be started: 127 when it
/// is not on `PATH`, 126 when it exists but cannot be executed.
pub fn spawn_failure_code(err: &anyhow::Error) -> Option<u8> {
    match err.downcast_ref::<io::Error>()?.kind() {
        io::ErrorKind::NotFound => Some(127),
        io::ErrorKind::PermissionDenied => Some(126),
        _ => None,
    }
}

pub async fn query(remote: &str) -> Result<RemoteUrl> {
    debug!(remote, "running git remote get-url");
    let output = Command::new("git")
        .args(["remote", "get-url", remote])
        .output()
        .await
        .context("failed to run git")?;
    trace!(status = ?output.status, stdout_len = output.stdout.len(), stderr_len = output.stderr.len());
    Ok(output.into())
}
