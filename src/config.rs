use std::path::PathBuf;

const LOG_ENV: &str = "APPROVE_SCRIPTS_LOG";
const LOG_FILE_ENV: &str = "APPROVE_SCRIPTS_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "/tmp/approve-scripts.log";

/// Diagnostic logging settings. Logging is off unless asked for, since
/// stdout belongs to the hook protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    /// `tracing` filter directive, None when logging is disabled
    pub filter: Option<String>,
    pub file: PathBuf,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::parse(
            std::env::var(LOG_ENV).ok().as_deref(),
            std::env::var(LOG_FILE_ENV).ok().as_deref(),
        )
    }

    pub fn parse(filter: Option<&str>, file: Option<&str>) -> Self {
        let filter = match filter.map(str::trim) {
            None | Some("") | Some("0") | Some("off") => None,
            Some(directive) => Some(directive.to_string()),
        };
        let file = match file.map(str::trim) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from(DEFAULT_LOG_FILE),
        };

        LogSettings { filter, file }
    }
}
