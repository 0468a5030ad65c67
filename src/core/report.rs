//! Console text for the CORS applier.
//!
//! Rendering is kept separate from printing so the binary stays a thin shell
//! and every branch can be asserted on as a string.

use crate::core::{ApplyOutcome, BucketId, CorsConfiguration, Invocation};
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

const RULE: &str = "============================================================";

pub fn console_url(project_id: &str) -> String {
    format!(
        "https://console.firebase.google.com/project/{}/storage",
        project_id
    )
}

pub fn render_preamble(
    config_path: &Path,
    config_json: &str,
    bucket: &BucketId,
    tool: &str,
    project_id: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "📝 Created CORS configuration file: {}",
        config_path.display()
    );
    let _ = writeln!(out, "{}", config_json);
    let _ = writeln!(out);
    let _ = writeln!(out, "⏳ Attempting to set CORS on {}...", bucket);
    let _ = writeln!(
        out,
        "Note: This requires {} to be installed and authenticated.",
        tool
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "If you see 'command not found' below, you'll need to:");
    let _ = writeln!(
        out,
        "1. Install Google Cloud SDK from: https://cloud.google.com/sdk/docs/install"
    );
    let _ = writeln!(out, "2. Run: gcloud auth login");
    let _ = writeln!(out, "3. Run: gcloud config set project {}", project_id);
    let _ = writeln!(out, "4. Then run this tool again");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);
    out
}

pub fn render_dry_run(invocation: &Invocation) -> String {
    format!(
        "🔍 DRY RUN MODE - not invoking the storage CLI\n   Would run: {}\n",
        invocation.command_line()
    )
}

pub fn render_outcome(
    outcome: &ApplyOutcome,
    config: &CorsConfiguration,
    invocation: &Invocation,
    project_id: &str,
) -> String {
    let mut out = String::new();
    match outcome {
        ApplyOutcome::Applied { stdout } => {
            let _ = writeln!(out, "✅ CORS configuration successfully applied!");
            let _ = writeln!(out, "{}", stdout);
            let _ = writeln!(
                out,
                "Allowed origins: {}",
                config.origins().collect::<Vec<_>>().join(", ")
            );
            let _ = writeln!(
                out,
                "Allowed methods: {}",
                config.methods().collect::<Vec<_>>().join(", ")
            );
        }
        ApplyOutcome::ToolMissing { tool } => {
            let _ = writeln!(out, "❌ {} command not found", tool);
            let _ = writeln!(out);
            let _ = writeln!(out, "To fix CORS via Firebase Console:");
            let _ = writeln!(out, "1. Go to: {}", console_url(project_id));
            let _ = writeln!(out, "2. Click on 'Rules' tab");
            let _ = writeln!(
                out,
                "3. Or use the Firebase Console to configure CORS via the Storage bucket settings"
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "Alternatively, install gcloud SDK and run:");
            let _ = writeln!(out, "  {}", invocation.command_line());
        }
        ApplyOutcome::Rejected { stderr } => {
            let _ = writeln!(out, "❌ Failed to set CORS:");
            let _ = writeln!(out, "{}", stderr);
        }
        ApplyOutcome::Errored { message } => {
            let _ = writeln!(out, "❌ Error: {}", message);
        }
    }
    out
}

pub fn retained_notice(config_path: &Path) -> String {
    format!(
        "\n📄 CORS configuration saved to: {}\n   You can use this file manually if needed\n",
        config_path.display()
    )
}

/// Prints [`retained_notice`] when dropped, on every exit from the owning scope.
pub struct RetainedFileNotice<W: Write> {
    config_path: PathBuf,
    out: W,
}

impl<W: Write> RetainedFileNotice<W> {
    pub fn new(config_path: impl Into<PathBuf>, out: W) -> Self {
        Self {
            config_path: config_path.into(),
            out,
        }
    }
}

impl<W: Write> Drop for RetainedFileNotice<W> {
    fn drop(&mut self) {
        let _ = self
            .out
            .write_all(retained_notice(&self.config_path).as_bytes());
        let _ = self.out.flush();
    }
}
