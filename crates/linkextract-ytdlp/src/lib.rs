//! yt-dlp invocation and output parsing.
//!
//! Thin library around the `yt-dlp` CLI: it builds invocations, parses the
//! JSON metadata dump and the tabular format listing, and selects the best
//! video/audio stream from a format list. It performs no downloading or
//! transcoding of its own.

mod error;
pub mod formats;
pub mod info;
mod invoke;
pub mod tools;
pub mod update;

pub use error::{Error, Result};
pub use formats::{
    list_formats, parse_format_table, select_best_streams, BestStreams, FormatEntry, StreamFormat,
};
pub use info::{extract_info, MediaSummary, YOUTUBE_ARGS};
pub use invoke::run_tool;
pub use tools::{check_tool, ToolInfo};
pub use update::self_update;

/// Default binary name of the extraction tool.
pub const DEFAULT_TOOL: &str = "yt-dlp";
