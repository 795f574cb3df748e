//! Message table loader
//!
//! Scene wording lives in `translations/<lang>.toml` and is embedded at build
//! time. Keys are dotted paths into the table (`welcome.returning`); values are
//! strings with `{name}` placeholders or arrays of strings.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::utils::errors::{AliceSkillError, Result};

const RUSSIAN: &str = include_str!("../../translations/ru.toml");

/// Placeholder values substituted into a message
pub type MessageParams<'a> = &'a [(&'a str, &'a str)];

/// One language's message table
#[derive(Debug, Clone, Default)]
pub struct Messages {
    table: Map<String, Value>,
}

impl Messages {
    /// Parse a TOML message table
    pub fn from_toml(source: &str) -> Result<Self> {
        let value: Value = toml::from_str(source)
            .map_err(|e| AliceSkillError::Config(format!("Invalid message table: {}", e)))?;

        match value {
            Value::Object(table) => Ok(Self { table }),
            _ => Err(AliceSkillError::Config("Message table must be a TOML table".to_string())),
        }
    }

    /// Built-in Russian table, parsed once per process
    pub fn russian() -> &'static Messages {
        static MESSAGES: OnceLock<Messages> = OnceLock::new();
        MESSAGES.get_or_init(|| {
            Messages::from_toml(RUSSIAN).unwrap_or_else(|e| {
                error!(error = %e, "Failed to load built-in messages");
                Messages::default()
            })
        })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut current = self.table.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        Some(current)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Message text for `key`; the key itself when missing
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Message text for `key` with `{name}` placeholders filled
    pub fn t_with(&self, key: &str, params: MessageParams<'_>) -> String {
        match self.lookup(key).and_then(Value::as_str) {
            Some(text) => params.iter().fold(text.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            }),
            None => {
                warn!(key = key, "Message key not found");
                key.to_string()
            }
        }
    }

    /// String list for `key`, empty when missing
    pub fn list(&self, key: &str) -> Vec<&str> {
        self.lookup(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Random entry of the list under `key`
    pub fn pick(&self, key: &str) -> String {
        match self.list(key).choose(&mut rand::thread_rng()) {
            Some(text) => text.to_string(),
            None => {
                warn!(key = key, "Message list empty or missing");
                String::new()
            }
        }
    }
}
