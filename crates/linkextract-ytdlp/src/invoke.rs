//! Asynchronous invocation of the extraction tool.

use crate::{Error, Result};
use tokio::process::Command;

/// Run the tool with the given arguments and return its stdout.
///
/// The spawned process is awaited without blocking the calling task. Standard
/// error is captured separately and logged; the tool emits benign warnings
/// there even on success, so it never constitutes a failure by itself. A
/// non-zero exit status is a hard failure carrying the stderr text.
pub async fn run_tool(binary: &str, args: &[&str]) -> Result<String> {
    tracing::debug!(tool = %binary, ?args, "invoking tool");

    let output = Command::new(binary).args(args).output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found(binary)
        } else {
            Error::Io(e)
        }
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        tracing::debug!(tool = %binary, "stderr: {}", stderr.trim());
    }

    if !output.status.success() {
        let message = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(Error::tool_failed(binary, message));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error(binary, format!("invalid UTF-8: {}", e)))
}
