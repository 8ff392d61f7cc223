use anyhow::{Context, Result};
use std::io::{self, Read, Write};

mod config;
mod input;
mod logging;
mod output;
mod rules;

use config::LogSettings;
use input::HookInput;

/// Upper bound on the hook payload read from stdin (Write payloads carry file contents)
const MAX_INPUT_BYTES: u64 = 64 * 1024 * 1024;

fn main() {
    // Logging is best effort; a bad log path must not change the decision.
    let _ = logging::init(&LogSettings::from_env());

    // Fail open: any error means no output, and the exit status stays 0.
    if let Err(err) = run() {
        tracing::debug!("no decision: {:#}", err);
    }
}

fn run() -> Result<()> {
    let input = read_input(io::stdin())?;

    tracing::info!(
        "event={} session={} tool={:?}",
        input.hook_event_name.as_deref().unwrap_or("unknown"),
        input.session_id.as_deref().unwrap_or("unknown"),
        input.tool_name
    );

    match rules::evaluate(&input) {
        Some(output) => {
            tracing::info!(
                "{}: allow ({})",
                input.tool_name,
                output.hook_specific_output.permission_decision_reason
            );
            let line = serde_json::to_string(&output)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", line).context("Failed to write decision")?;
            stdout.flush()?;
        }
        None => {
            tracing::debug!("{}: no matching rule, deferring", input.tool_name);
        }
    }

    Ok(())
}

fn read_input(reader: impl Read) -> Result<HookInput> {
    let mut buffer = String::new();
    reader
        .take(MAX_INPUT_BYTES)
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    HookInput::parse(&buffer)
}
