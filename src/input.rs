use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Input JSON from Claude Code hook system
#[derive(Debug, Deserialize)]
pub struct HookInput {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub tool_name: String,
    /// Tool-specific parameters (`command` for Bash, `file_path` for Write, ...)
    #[serde(default)]
    pub tool_input: Value,
    /// Only logged, so a value of the wrong type is dropped rather than rejected
    #[serde(default, deserialize_with = "string_or_none")]
    pub hook_event_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub session_id: Option<String>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(String::from))
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_or_none(deserializer)?.unwrap_or_default())
}

impl HookInput {
    /// Parse a hook payload. The document must be a JSON object; a repeated
    /// key keeps its last value.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Invalid JSON")?;
        let input = serde_json::from_value(value).context("Hook input is not an object")?;
        Ok(input)
    }

    /// String field from `tool_input`, or "" when missing or not a string.
    pub fn input_str(&self, field: &str) -> &str {
        self.tool_input
            .get(field)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}
