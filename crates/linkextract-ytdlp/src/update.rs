//! Self-update of the extraction tool.

use crate::invoke::run_tool;
use crate::Result;

/// Run the tool's self-update subcommand and return its output.
///
/// Best-effort maintenance: callers log the outcome and carry on. A failure
/// here must never take the service down.
pub async fn self_update(binary: &str) -> Result<String> {
    run_tool(binary, &["-U"]).await
}
