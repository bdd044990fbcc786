//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which builds an [`AppContext`] from a test
//! config. The [`with_server`] constructor starts Axum on a random port for
//! HTTP-level testing. Extractor paths are exercised through stub tool
//! scripts so no real yt-dlp is needed.

use std::net::SocketAddr;
use std::sync::Arc;

use linkextract::config::Config;
use linkextract::server::{create_router, AppContext};

/// Test harness wrapping a fully-constructed [`AppContext`].
pub struct TestHarness {
    pub ctx: AppContext,
}

impl TestHarness {
    /// Create a new harness with default configuration. Startup self-update
    /// is disabled so tests never shell out unexpectedly.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.tool.update_on_start = false;
        Self::with_config(config)
    }

    /// Create a new harness with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let ctx = AppContext {
            config: Arc::new(config),
        };
        Self { ctx }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let mut config = Config::default();
        config.tool.update_on_start = false;
        Self::with_server_config(config).await
    }

    /// Start an Axum server with custom config on a random port.
    pub async fn with_server_config(config: Config) -> (Self, SocketAddr) {
        let harness = Self::with_config(config);
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}

/// Write an executable stub standing in for the extraction tool and return
/// its path. The script body decides what the "tool" prints and how it exits.
#[cfg(unix)]
pub fn stub_tool(dir: &tempfile::TempDir, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join("yt-dlp-stub");
    let script = format!("#!/bin/sh\n{}\n", body);
    std::fs::write(&path, script).expect("failed to write stub tool");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod stub tool");
    path.to_string_lossy().into_owned()
}

/// Config whose tool binary points at a stub script.
#[cfg(unix)]
pub fn stub_config(binary: String) -> Config {
    let mut config = Config::default();
    config.tool.binary = binary;
    config.tool.update_on_start = false;
    config
}
