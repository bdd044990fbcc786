//! Media metadata extraction and normalization.

use crate::formats::{select_best_streams, StreamFormat};
use crate::invoke::run_tool;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Extra arguments for YouTube URLs. The default extraction path is
/// unreliable for this platform, so an alternate client is emulated and
/// geo-restrictions bypassed.
pub const YOUTUBE_ARGS: &[&str] = &[
    "--extractor-args",
    "youtube:player_client=android",
    "--geo-bypass",
];

/// Fallback title when the source provides none.
const UNKNOWN_TITLE: &str = "Unknown title";

/// Normalized media summary returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub direct_video_url: Option<String>,
    pub direct_audio_url: Option<String>,
}

/// Subset of the tool's JSON metadata dump that we consume.
#[derive(Debug, Deserialize)]
struct RawMetadata {
    title: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    #[serde(default)]
    formats: Vec<StreamFormat>,
}

/// Extract a normalized media summary for a URL.
///
/// Runs the tool in JSON-dump mode with `extra_args` appended to the common
/// flags, parses stdout as a single JSON document, and selects the best
/// video/audio streams. One invocation per call, no retries.
pub async fn extract_info(binary: &str, url: &str, extra_args: &[&str]) -> Result<MediaSummary> {
    let mut args = vec!["--dump-json", "--no-warnings"];
    args.extend_from_slice(extra_args);
    args.push(url);

    let stdout = run_tool(binary, &args).await?;
    summarize(binary, &stdout)
}

/// Build a [`MediaSummary`] from the tool's raw JSON dump.
fn summarize(binary: &str, raw: &str) -> Result<MediaSummary> {
    let metadata: RawMetadata = serde_json::from_str(raw)
        .map_err(|e| Error::parse_error(binary, format!("invalid JSON metadata: {}", e)))?;

    let best = select_best_streams(&metadata.formats);

    Ok(MediaSummary {
        title: metadata.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        description: metadata.description.unwrap_or_default(),
        thumbnail: metadata.thumbnail.unwrap_or_default(),
        direct_video_url: best.video_url,
        direct_audio_url: best.audio_url,
    })
}
