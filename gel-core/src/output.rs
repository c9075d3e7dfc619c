//! # Command Output
//!
//! Value returned by a command entry point.

use serde_json::Value;
use std::fmt;

/// Command output
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Success,
    Message(String),
    Data(Value),
}

impl CommandOutput {
    /// Check whether there is anything to display
    pub fn is_empty(&self) -> bool {
        matches!(self, CommandOutput::Success)
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Success => write!(f, "Success"),
            CommandOutput::Message(msg) => write!(f, "{}", msg),
            CommandOutput::Data(data) => write!(f, "{:#}", data),
        }
    }
}

impl From<String> for CommandOutput {
    fn from(msg: String) -> Self {
        CommandOutput::Message(msg)
    }
}

impl From<Value> for CommandOutput {
    fn from(data: Value) -> Self {
        CommandOutput::Data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        assert_eq!(CommandOutput::Success.to_string(), "Success");
        assert_eq!(CommandOutput::from("hi".to_string()).to_string(), "hi");
        assert_eq!(
            CommandOutput::from(json!({"a": 1})).to_string(),
            "{\n  \"a\": 1\n}"
        );
    }
}
