// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Logging sink and subscriber setup

use serde::{Deserialize, Serialize};

/// Severity accepted by the logging sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Emit a `(message, level, details)` record.
///
/// Fire and forget: nothing is returned, so callers cannot depend on the sink.
pub fn record(level: LogLevel, message: &str, details: Option<&serde_json::Value>) {
    let details = details.map(|d| d.to_string()).unwrap_or_default();
    match level {
        LogLevel::Debug => tracing::debug!(details = %details, "{}", message),
        LogLevel::Info => tracing::info!(details = %details, "{}", message),
        LogLevel::Warn => tracing::warn!(details = %details, "{}", message),
        LogLevel::Error => tracing::error!(details = %details, "{}", message),
        LogLevel::Fatal => tracing::error!(fatal = true, details = %details, "{}", message),
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
