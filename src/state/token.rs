//! State token codec
//!
//! Alice round-trips whatever the skill puts into `session_state` back to it as
//! `state.session` on the next turn. The scene id stored there is the only thing
//! carrying the conversation from one request to the next.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key under the inbound `state` object that holds session-scoped state
pub const STATE_REQUEST_KEY: &str = "session";

/// Field of the session state holding the active scene id
pub const SCENE_FIELD: &str = "scene";

/// Session-scoped state written into every reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub scene: String,
}

impl SessionState {
    pub fn new(scene: impl Into<String>) -> Self {
        Self { scene: scene.into() }
    }
}

/// Extract the prior scene id from the inbound `state` object.
///
/// Returns `None` only when the token is absent (missing or `null` at any level).
/// A present but non-string value is rendered to text and still counts as a token,
/// so the catalog can resolve it to the default scene.
pub fn decode_prior_scene(state: Option<&Value>) -> Option<String> {
    let scene = state?.get(STATE_REQUEST_KEY)?.get(SCENE_FIELD)?;

    match scene {
        Value::Null => None,
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}
