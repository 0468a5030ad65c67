use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Shell-style rendering used in fallback instructions.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs to completion, capturing stdout and stderr separately.
    /// A missing program maps to `ToolNotFound`, an expired deadline to `ToolTimeout`.
    async fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<CommandOutput>;
}
