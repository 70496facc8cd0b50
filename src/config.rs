// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads port, database URL and Gemini credentials from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! Environment-based configuration for the larder server

use anyhow::{Context, Result};
use std::env;
use tracing::warn;

/// Default HTTP port when `HTTP_PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default database URL when `DATABASE_URL` is unset
const DEFAULT_DATABASE_URL: &str = "sqlite:larder.db";

/// Default Gemini model when `GEMINI_MODEL` is unset
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Server configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port to bind
    pub http_port: u16,
    /// Database connection URL (sqlite)
    pub database_url: String,
    /// Gemini API key; absence is tolerated at startup and surfaces later
    /// as an external-service failure on the suggestion page
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier for meal suggestions
    pub gemini_model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; meal suggestions will be unavailable");
        }

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into());

        Ok(Self {
            http_port,
            database_url,
            gemini_api_key,
            gemini_model,
        })
    }

    /// One-line summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} model={} gemini_key={}",
            self.http_port,
            self.database_url,
            self.gemini_model,
            if self.gemini_api_key.is_some() {
                "configured"
            } else {
                "missing"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Writer handing out clones of a shared buffer so tests can assert on
    /// emitted log lines
    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_from_env_warns_when_api_key_missing() {
        env::remove_var("GEMINI_API_KEY");

        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_max_level(tracing::Level::WARN)
            .finish();

        let config =
            tracing::subscriber::with_default(subscriber, || ServerConfig::from_env()).unwrap();

        assert!(config.gemini_api_key.is_none());
        let output = writer.contents();
        assert!(output.contains("GEMINI_API_KEY is not set"));
        assert!(output.contains("WARN"));
    }

    #[test]
    fn test_summary_redacts_api_key() {
        let config = ServerConfig {
            http_port: 9090,
            database_url: "sqlite::memory:".into(),
            gemini_api_key: Some("secret-key".into()),
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
        };
        let summary = config.summary();
        assert!(summary.contains("port=9090"));
        assert!(summary.contains("gemini_key=configured"));
        assert!(!summary.contains("secret-key"));
    }

    #[test]
    fn test_summary_reports_missing_key() {
        let config = ServerConfig {
            http_port: DEFAULT_HTTP_PORT,
            database_url: DEFAULT_DATABASE_URL.into(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
        };
        assert!(config.summary().contains("gemini_key=missing"));
    }
}
