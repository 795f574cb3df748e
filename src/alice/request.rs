//! Inbound Alice webhook event
//!
//! Normalizes the raw event body into the few fields the dialog router and
//! scenes consume: caller identity, the prior scene token and the utterance.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::lenient;
use crate::state::token::decode_prior_scene;
use crate::utils::errors::{AliceSkillError, Result};

/// Protocol version assumed when the event does not carry one
pub const DEFAULT_PROTOCOL_VERSION: &str = "1.0";

/// Raw webhook payload as sent by the platform.
///
/// Every field tolerates `null` and mistyped values, falling back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AliceEvent {
    #[serde(deserialize_with = "lenient::or_default")]
    pub session: SessionInfo,
    #[serde(deserialize_with = "lenient::or_default")]
    pub request: Utterance,
    pub state: Option<Value>,
    #[serde(deserialize_with = "lenient::string")]
    pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionInfo {
    #[serde(deserialize_with = "lenient::or_default")]
    pub new: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub session_id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub message_id: u64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub user: Option<SessionUser>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub application: Option<SessionApplication>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionUser {
    #[serde(deserialize_with = "lenient::string")]
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionApplication {
    #[serde(deserialize_with = "lenient::string")]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Utterance {
    #[serde(deserialize_with = "lenient::string")]
    pub command: String,
    #[serde(deserialize_with = "lenient::string")]
    pub original_utterance: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub nlu: Nlu,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Nlu {
    #[serde(deserialize_with = "lenient::strings")]
    pub tokens: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub intents: HashMap<String, Value>,
}

/// Durable key of a caller in the user store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Logged-in Yandex account, stable across devices
    User(String),
    /// Application instance on one device
    Application(String),
}

impl Identity {
    pub fn as_str(&self) -> &str {
        match self {
            Identity::User(id) | Identity::Application(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Identity::User(_) => "user",
            Identity::Application(_) => "application",
        }
    }
}

/// Normalized view of one inbound event
#[derive(Debug, Clone)]
pub struct AliceRequest {
    event: AliceEvent,
    prior_scene: Option<String>,
}

impl AliceRequest {
    /// Parse a raw webhook body.
    ///
    /// Anything that is not a JSON object is a `MalformedEvent`.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let object: Map<String, Value> =
            serde_json::from_slice(body).map_err(AliceSkillError::MalformedEvent)?;
        let event: AliceEvent =
            serde_json::from_value(Value::Object(object)).map_err(AliceSkillError::MalformedEvent)?;

        Ok(Self::from_event(event))
    }

    pub fn from_event(event: AliceEvent) -> Self {
        let prior_scene = decode_prior_scene(event.state.as_ref());
        Self { event, prior_scene }
    }

    /// Caller identity, the session user id taking precedence over the application id
    pub fn identity(&self) -> Option<Identity> {
        let session = &self.event.session;

        if let Some(user) = session.user.as_ref().filter(|u| !u.user_id.is_empty()) {
            return Some(Identity::User(user.user_id.clone()));
        }

        session
            .application
            .as_ref()
            .filter(|a| !a.application_id.is_empty())
            .map(|a| Identity::Application(a.application_id.clone()))
    }

    /// Scene id echoed back from the previous turn, `None` on the first turn
    pub fn prior_scene_id(&self) -> Option<&str> {
        self.prior_scene.as_deref()
    }

    /// Normalized command text (lowercased, punctuation stripped by the platform)
    pub fn command(&self) -> &str {
        &self.event.request.command
    }

    pub fn original_utterance(&self) -> &str {
        &self.event.request.original_utterance
    }

    pub fn tokens(&self) -> &[String] {
        &self.event.request.nlu.tokens
    }

    pub fn has_intent(&self, name: &str) -> bool {
        self.event.request.nlu.intents.contains_key(name)
    }

    /// True when any NLU token equals one of `words`.
    /// Falls back to splitting the command when the platform sent no tokens.
    pub fn mentions_any(&self, words: &[&str]) -> bool {
        let matches = |token: &str| words.contains(&token.to_lowercase().as_str());

        if self.tokens().is_empty() {
            self.command().split_whitespace().any(matches)
        } else {
            self.tokens().iter().any(|token| matches(token))
        }
    }

    pub fn is_new_session(&self) -> bool {
        self.event.session.new
    }

    pub fn session_id(&self) -> &str {
        &self.event.session.session_id
    }

    /// Protocol version to echo in the reply
    pub fn version(&self) -> &str {
        if self.event.version.is_empty() {
            DEFAULT_PROTOCOL_VERSION
        } else {
            &self.event.version
        }
    }

    pub fn event(&self) -> &AliceEvent {
        &self.event
    }
}
