//! Outbound Alice reply

use serde::{Deserialize, Serialize};

use crate::state::token::SessionState;

/// Reply envelope returned to the platform
///
/// `session_state.scene` is echoed back by Alice on the next turn and is how
/// the dialog router finds the active scene again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliceResponse {
    pub version: String,
    pub response: ResponseBody,
    pub session_state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<String>,
    #[serde(default)]
    pub end_session: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// Suggest button shown under the reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub hide: bool,
}

impl Button {
    /// Suggest chip that disappears after the user taps it
    pub fn suggest(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            hide: true,
        }
    }
}

impl AliceResponse {
    pub fn new(version: impl Into<String>, scene: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            response: ResponseBody {
                text: text.into(),
                tts: None,
                end_session: false,
                buttons: Vec::new(),
            },
            session_state: SessionState::new(scene),
        }
    }

    pub fn with_tts(mut self, tts: impl Into<String>) -> Self {
        self.response.tts = Some(tts.into());
        self
    }

    pub fn with_buttons<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response.buttons = titles.into_iter().map(Button::suggest).collect();
        self
    }

    pub fn end_session(mut self) -> Self {
        self.response.end_session = true;
        self
    }

    /// Scene id this reply hands back as the next state token
    pub fn scene(&self) -> &str {
        &self.session_state.scene
    }

    pub fn text(&self) -> &str {
        &self.response.text
    }
}
