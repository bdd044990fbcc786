// Re-export all extraction functionality from linkextract-ytdlp
pub use linkextract_ytdlp::{
    check_tool, extract_info, list_formats, select_best_streams, self_update, BestStreams, Error,
    FormatEntry, MediaSummary, StreamFormat, ToolInfo, DEFAULT_TOOL, YOUTUBE_ARGS,
};

/// Check the external tools the service depends on.
pub fn check_tools(binary: &str) -> Vec<ToolInfo> {
    vec![check_tool(binary)]
}
