//! `tracing` setup for the browser. Events are formatted by `tracing-subscriber`
//! and `tracing-web` writes each one to the console method matching its level.
//! Callers must not log passwords, request bodies, or document URLs.

use tracing::Level;

/// Parses a verbosity value: `0..=4` or `error|warn|info|debug|trace`.
pub fn parse_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Resolves the configured level, falling back to `INFO` on invalid input.
pub fn level_or_default(value: &str) -> Level {
    parse_level(value).unwrap_or(Level::INFO)
}

/// Installs the panic hook and the global subscriber. Safe to call twice; the
/// second subscriber is ignored.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    console_error_panic_hook::set_once();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!(%level, "Browser logging initialized");
    }
}
