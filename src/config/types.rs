use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tool: ToolConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Binary name or path of the extraction tool.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Run the tool's self-update once after the listener binds.
    #[serde(default = "default_update_on_start")]
    pub update_on_start: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            update_on_start: default_update_on_start(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Port selection honors the `PORT` environment variable, falling back to
/// 3000 when unset or unparsable.
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

fn default_binary() -> String {
    linkextract_ytdlp::DEFAULT_TOOL.to_string()
}

fn default_update_on_start() -> bool {
    true
}
