use crate::core::{CommandOutput, CommandRunner, Invocation};
use crate::utils::error::{Result, SiteOpsError};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Runs real programs through `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<CommandOutput> {
        tracing::debug!("Spawning: {}", invocation.command_line());

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SiteOpsError::ToolNotFound {
                    tool: invocation.program.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        // Dropping the future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                tracing::warn!(
                    "{} still running after {:?}, killing it",
                    invocation.program,
                    timeout
                );
                return Err(SiteOpsError::ToolTimeout {
                    tool: invocation.program.clone(),
                    seconds: timeout.as_secs(),
                });
            }
        };

        tracing::debug!("{} exited with {:?}", invocation.program, output.status.code());

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
