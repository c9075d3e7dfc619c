//! # Parsed Arguments
//!
//! Flat mapping from argument destination to value, handed to command entry points.
//!
//! Every level of the parser tree contributes its declared arguments. The sub-command chosen at a
//! level is stored under that level's value name, with `-` replaced by `_` (`gel-command` becomes
//! `gel_command`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::ops::Index;

/// Key used when a parser with sub-commands declares no value name
const DEFAULT_SUBCOMMAND_KEY: &str = "command";

static NULL: Value = Value::Null;

/// Parsed argument mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    /// Create an empty argument mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten parsed matches of `command` into a mapping
    pub fn from_matches(command: &Command, matches: &ArgMatches) -> Self {
        let mut arguments = Self::new();
        arguments.collect(command, matches);
        arguments
    }

    fn collect(&mut self, command: &Command, matches: &ArgMatches) {
        for arg in command.get_arguments() {
            if is_builtin(arg) {
                continue;
            }
            self.0
                .insert(arg.get_id().as_str().to_string(), value_of(matches, arg));
        }

        if !command.has_subcommands() {
            return;
        }

        let key = subcommand_key(command);
        match matches.subcommand() {
            Some((name, sub_matches)) => {
                self.0.insert(key, Value::String(name.to_string()));
                if let Some(sub_command) = command.find_subcommand(name) {
                    self.collect(sub_command, sub_matches);
                }
            }
            None => {
                self.0.insert(key, Value::Null);
            }
        }
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Get a string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Get a boolean value
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Check if a key is present (including keys holding `null`)
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<&str> for Arguments {
    type Output = Value;

    /// Missing keys index to `null`
    fn index(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// Destination key for the sub-command chosen under `command`
pub fn subcommand_key(command: &Command) -> String {
    command
        .get_subcommand_value_name()
        .unwrap_or(DEFAULT_SUBCOMMAND_KEY)
        .replace('-', "_")
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn value_of(matches: &ArgMatches, arg: &Arg) -> Value {
    let id = arg.get_id().as_str();

    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => {
            return matches
                .try_get_one::<bool>(id)
                .ok()
                .flatten()
                .map_or(Value::Null, |flag| Value::Bool(*flag));
        }
        ArgAction::Count => {
            return matches
                .try_get_one::<u8>(id)
                .ok()
                .flatten()
                .map_or(Value::Null, |count| Value::from(*count));
        }
        _ => {}
    }

    let multiple = matches!(arg.get_action(), ArgAction::Append)
        || arg
            .get_num_args()
            .is_some_and(|range| range.max_values() > 1);

    // Typed parsers do not downcast to String; fall back to the raw text
    let values: Option<Vec<String>> = match matches.try_get_many::<String>(id) {
        Ok(values) => values.map(|values| values.cloned().collect()),
        Err(_) => matches.try_get_raw(id).ok().flatten().map(|raw| {
            raw.map(|value| value.to_string_lossy().into_owned())
                .collect()
        }),
    };

    match values {
        None => Value::Null,
        Some(values) if multiple => Value::Array(values.into_iter().map(Value::String).collect()),
        Some(values) => values.into_iter().next().map_or(Value::Null, Value::String),
    }
}
