use crate::core::{ApplyReport, BucketId, CommandRunner, CorsConfiguration, Invocation};
use crate::utils::error::{Result, SiteOpsError};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TOOL: &str = "gsutil";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_OUTPUT_FILE: &str = "cors_config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplierSettings {
    pub program: String,
    pub timeout: Duration,
    pub output_file: PathBuf,
}

impl Default for ApplierSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Writes a CORS document to disk and hands it to the storage CLI.
///
/// The written file is never removed, so it can be applied by hand when the
/// CLI is missing or fails. There is exactly one invocation per call.
pub struct CorsApplier<R: CommandRunner> {
    runner: R,
    settings: ApplierSettings,
}

impl<R: CommandRunner> CorsApplier<R> {
    pub fn new(runner: R, settings: ApplierSettings) -> Self {
        Self { runner, settings }
    }

    pub fn settings(&self) -> &ApplierSettings {
        &self.settings
    }

    pub fn output_file(&self) -> &Path {
        &self.settings.output_file
    }

    /// `<tool> cors set <file> <bucket>`
    pub fn invocation(&self, bucket: &BucketId) -> Invocation {
        Invocation::new(
            self.settings.program.clone(),
            vec![
                "cors".to_string(),
                "set".to_string(),
                self.settings.output_file.display().to_string(),
                bucket.as_str().to_string(),
            ],
        )
    }

    pub async fn write_configuration(&self, config: &CorsConfiguration) -> Result<PathBuf> {
        let path = &self.settings.output_file;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, config.to_pretty_json()?).await?;
        tracing::info!("Wrote CORS configuration to {}", path.display());
        Ok(path.clone())
    }

    /// Runs the CLI against an already written configuration file.
    pub async fn invoke(&self, bucket: &BucketId) -> Result<ApplyReport> {
        let invocation = self.invocation(bucket);
        tracing::info!("Applying CORS to {} via {}", bucket, self.settings.program);

        let output = self.runner.run(&invocation, self.settings.timeout).await?;

        if !output.success {
            tracing::error!(
                "{} exited with {:?}",
                self.settings.program,
                output.code
            );
            return Err(SiteOpsError::ToolFailed {
                tool: self.settings.program.clone(),
                code: output.code,
                stderr: output.stderr,
            });
        }

        Ok(ApplyReport {
            config_path: self.settings.output_file.clone(),
            bucket: bucket.clone(),
            stdout: output.stdout,
        })
    }

    pub async fn apply(&self, config: &CorsConfiguration, bucket: &BucketId) -> Result<ApplyReport> {
        self.write_configuration(config).await?;
        self.invoke(bucket).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CommandOutput;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone)]
    struct FakeRunner {
        response: Arc<dyn Fn() -> Result<CommandOutput> + Send + Sync>,
        calls: Arc<Mutex<Vec<(Invocation, Duration)>>>,
    }

    impl FakeRunner {
        fn new(response: impl Fn() -> Result<CommandOutput> + Send + Sync + 'static) -> Self {
            Self {
                response: Arc::new(response),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn exiting(code: i32, stdout: &str, stderr: &str) -> Self {
            let (stdout, stderr) = (stdout.to_string(), stderr.to_string());
            Self::new(move || {
                Ok(CommandOutput {
                    success: code == 0,
                    code: Some(code),
                    stdout: stdout.clone(),
                    stderr: stderr.clone(),
                })
            })
        }

        fn calls(&self) -> Vec<(Invocation, Duration)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((invocation.clone(), timeout));
            (self.response)()
        }
    }

    fn settings_in(dir: &TempDir) -> ApplierSettings {
        ApplierSettings {
            output_file: dir.path().join("cors_config.json"),
            ..ApplierSettings::default()
        }
    }

    #[test]
    fn test_invocation_arguments() {
        let applier = CorsApplier::new(FakeRunner::exiting(0, "", ""), ApplierSettings::default());
        let invocation = applier.invocation(&BucketId::new("gs://swash-app-436a1.firebasestorage.app"));

        assert_eq!(
            invocation.command_line(),
            "gsutil cors set cors_config.json gs://swash-app-436a1.firebasestorage.app"
        );
    }

    #[test]
    fn test_success_returns_stdout_and_single_call() {
        let dir = TempDir::new().unwrap();
        let runner = FakeRunner::exiting(0, "Setting CORS on gs://b/...\n", "");
        let applier = CorsApplier::new(runner.clone(), settings_in(&dir));

        let report = tokio_test::block_on(
            applier.apply(&CorsConfiguration::default(), &BucketId::new("gs://b")),
        )
        .unwrap();

        assert_eq!(report.stdout, "Setting CORS on gs://b/...\n");
        assert_eq!(report.config_path, dir.path().join("cors_config.json"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
    }

    #[test]
    fn test_nonzero_exit_is_tool_failed_and_file_kept() {
        let dir = TempDir::new().unwrap();
        let applier = CorsApplier::new(
            FakeRunner::exiting(1, "", "AccessDeniedException: 403"),
            settings_in(&dir),
        );

        let err = tokio_test::block_on(
            applier.apply(&CorsConfiguration::default(), &BucketId::new("gs://b")),
        )
        .unwrap_err();

        match err {
            SiteOpsError::ToolFailed { code, stderr, .. } => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "AccessDeniedException: 403");
            }
            other => panic!("expected ToolFailed, got {:?}", other),
        }
        assert!(applier.output_file().exists());
    }

    #[test]
    fn test_missing_tool_keeps_file_and_does_not_retry() {
        let dir = TempDir::new().unwrap();
        let runner = FakeRunner::new(|| {
            Err(SiteOpsError::ToolNotFound {
                tool: "gsutil".to_string(),
            })
        });
        let applier = CorsApplier::new(runner.clone(), settings_in(&dir));
        let config = CorsConfiguration::default();

        let err = tokio_test::block_on(applier.apply(&config, &BucketId::new("gs://b"))).unwrap_err();

        assert!(matches!(err, SiteOpsError::ToolNotFound { .. }));
        assert_eq!(runner.calls().len(), 1);

        let written = std::fs::read_to_string(applier.output_file()).unwrap();
        assert_eq!(CorsConfiguration::from_json(&written).unwrap(), config);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let settings = ApplierSettings {
            output_file: dir.path().join("nested/out/cors.json"),
            ..ApplierSettings::default()
        };
        let applier = CorsApplier::new(FakeRunner::exiting(0, "", ""), settings);

        let path =
            tokio_test::block_on(applier.write_configuration(&CorsConfiguration::default())).unwrap();
        assert!(path.exists());
    }
}
