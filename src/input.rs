use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Input JSON from Claude Code hook system
#[derive(Debug, Deserialize)]
pub struct HookEvent {
    #[serde(default, deserialize_with = "string_or_none")]
    tool_name: Option<String>,
    /// Tool parameters; shape depends on the tool
    #[serde(default)]
    pub tool_input: Value,
    #[serde(default, deserialize_with = "string_or_none")]
    cwd: Option<String>,
}

/// Null or non-string values read as absent rather than failing the parse
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(String::from))
}

impl HookEvent {
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Invalid JSON input")?;
        ensure!(
            value.is_object(),
            "Invalid JSON input: expected an object, got {}",
            kind(&value)
        );
        serde_json::from_value(value).context("Invalid JSON input")
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or_default()
    }

    /// `cwd` from the event, "." when absent
    pub fn cwd(&self) -> &str {
        self.cwd.as_deref().unwrap_or(".")
    }

    /// `tool_input.file_path` for Edit/Write events
    pub fn file_path(&self) -> &str {
        self.input_str("file_path")
    }

    /// `tool_input.command` for Bash events
    pub fn command(&self) -> &str {
        self.input_str("command")
    }

    pub fn working_dir(&self) -> PathBuf {
        PathBuf::from(self.cwd())
    }

    fn input_str(&self, key: &str) -> &str {
        self.tool_input
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read and parse the hook event from a reader (stdin in the binaries)
pub fn read_event(mut reader: impl Read) -> Result<HookEvent> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .context("Failed to read hook input")?;
    HookEvent::parse(&buffer)
}
