//! Stream format selection and format-table parsing.

use crate::invoke::run_tool;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Codec marker meaning "this stream carries no content of this kind".
const CODEC_NONE: &str = "none";

/// One selectable quality/codec variant from the tool's `formats` array.
///
/// Only the fields relevant to stream selection are deserialized; the tool
/// emits dozens more per entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamFormat {
    #[serde(default)]
    pub format_id: String,

    /// Video codec, `"none"` when the entry carries no video.
    pub vcodec: Option<String>,

    /// Audio codec, `"none"` when the entry carries no audio.
    pub acodec: Option<String>,

    /// Vertical resolution in pixels.
    pub height: Option<u32>,

    /// Average bitrate in kbit/s.
    pub abr: Option<f64>,

    /// Direct media URL.
    #[serde(default)]
    pub url: String,

    /// Container extension.
    #[serde(default)]
    pub ext: String,

    /// Free-text format description.
    #[serde(default)]
    pub format: String,
}

impl StreamFormat {
    /// Whether this entry carries synchronized audio and video.
    fn has_muxed_av(&self) -> bool {
        self.vcodec.as_deref() != Some(CODEC_NONE) && self.acodec.as_deref() != Some(CODEC_NONE)
    }

    /// Whether this entry carries audio at all.
    fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some(CODEC_NONE)
    }
}

/// Best direct stream URLs selected from a format list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestStreams {
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
}

/// Select the best video and audio streams from a format list.
///
/// Video candidates must carry both audio and video; the highest vertical
/// resolution wins, with missing resolution counted as 0. Audio candidates
/// only need an audio codec; the highest average bitrate wins, missing
/// bitrate counted as 0.0. Ties resolve to the earliest entry. An empty
/// candidate set yields `None`, which is not an error.
pub fn select_best_streams(formats: &[StreamFormat]) -> BestStreams {
    let mut best = BestStreams::default();

    let mut best_height = 0u32;
    for f in formats.iter().filter(|f| f.has_muxed_av()) {
        let height = f.height.unwrap_or(0);
        if best.video_url.is_none() || height > best_height {
            best_height = height;
            best.video_url = Some(f.url.clone());
        }
    }

    let mut best_abr = 0.0f64;
    for f in formats.iter().filter(|f| f.has_audio()) {
        let abr = f.abr.unwrap_or(0.0);
        if best.audio_url.is_none() || abr > best_abr {
            best_abr = abr;
            best.audio_url = Some(f.url.clone());
        }
    }

    best
}

/// One row of the tool's tabular format listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatEntry {
    pub format_id: String,
    pub extension: String,
    pub description: String,
}

/// List the available formats for a URL.
///
/// Runs the tool in list-formats mode and parses its line-oriented table.
/// An empty listing is valid output, not an error.
pub async fn list_formats(binary: &str, url: &str) -> Result<Vec<FormatEntry>> {
    let stdout = run_tool(binary, &["-F", "--no-warnings", url]).await?;
    Ok(parse_format_table(&stdout))
}

/// Parse the tool's tabular format listing into structured entries.
///
/// The table layout varies between tool versions, so parsing is deliberately
/// loose: progress markers (bracketed prefix), blank lines, and the
/// "Available formats" header are skipped, and any remaining line that does
/// not start with two whitespace-separated tokens followed by a description
/// is silently dropped. Input order is preserved.
pub fn parse_format_table(output: &str) -> Vec<FormatEntry> {
    output.lines().filter_map(parse_format_line).collect()
}

fn parse_format_line(line: &str) -> Option<FormatEntry> {
    if line.starts_with('[') || line.trim().is_empty() || line.contains("Available formats") {
        return None;
    }

    // Rows start at column zero; anything indented is a continuation or
    // decoration.
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let (format_id, rest) = split_leading_token(line)?;
    let (extension, rest) = split_leading_token(rest.trim_start())?;
    let description = rest.trim();
    if description.is_empty() {
        return None;
    }

    Some(FormatEntry {
        format_id: format_id.to_string(),
        extension: extension.to_string(),
        description: description.to_string(),
    })
}

/// Split off the first whitespace-delimited token. Returns `None` when the
/// input holds no whitespace after the token.
fn split_leading_token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], &s[end..]))
}
