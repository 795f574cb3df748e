//! Test data helpers
//!
//! Builders for Alice webhook events and a scripted scene whose transition is
//! fixed up front, for exercising the router independently of the built-in
//! scenes.

use async_trait::async_trait;
use serde_json::{json, Value};

use AliceSkill::alice::{AliceRequest, AliceResponse};
use AliceSkill::state::{Scene, SceneCatalog, SceneContext};

/// Event for a logged-in user, optionally carrying a prior scene token
pub fn user_event(user_id: &str, scene: Option<&str>) -> Value {
    let mut event = json!({
        "meta": {"locale": "ru-RU", "timezone": "Europe/Moscow"},
        "session": {
            "message_id": 0,
            "session_id": "test-session",
            "new": scene.is_none(),
            "user": {"user_id": user_id},
            "application": {"application_id": "test-app"}
        },
        "request": {
            "command": "",
            "original_utterance": "",
            "type": "SimpleUtterance",
            "nlu": {"tokens": [], "intents": {}}
        },
        "version": "1.0"
    });

    if let Some(scene) = scene {
        event["state"] = json!({"session": {"scene": scene}, "user": {}, "application": {}});
    }

    event
}

/// Event from an anonymous device, identified by application id only
pub fn application_event(application_id: &str) -> Value {
    json!({
        "session": {
            "new": true,
            "application": {"application_id": application_id}
        },
        "request": {"command": "", "nlu": {"tokens": [], "intents": {}}},
        "version": "1.0"
    })
}

/// Event with neither identity populated
pub fn anonymous_event() -> Value {
    json!({
        "session": {
            "new": true,
            "user": {"user_id": ""},
            "application": {"application_id": ""}
        },
        "request": {"command": ""},
        "version": "1.0"
    })
}

/// Set the utterance of an event, tokenizing on whitespace
pub fn with_utterance(mut event: Value, text: &str) -> Value {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    event["request"]["command"] = json!(text.to_lowercase());
    event["request"]["original_utterance"] = json!(text);
    event["request"]["nlu"]["tokens"] = json!(tokens);
    event
}

/// Add a platform intent to an event
pub fn with_intent(mut event: Value, intent: &str) -> Value {
    event["request"]["nlu"]["intents"][intent] = json!({"slots": {}});
    event
}

pub fn parse_event(event: &Value) -> AliceRequest {
    AliceRequest::parse(event.to_string().as_bytes()).expect("test event should parse")
}

/// Scene whose transition target is fixed at construction
#[derive(Debug, Clone, Copy)]
pub struct ScriptedScene {
    pub id: &'static str,
    pub next: Option<&'static str>,
}

#[async_trait]
impl Scene for ScriptedScene {
    fn id(&self) -> &str {
        self.id
    }

    async fn transition(&self, _ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
        self.next.map(|id| Box::new(ScriptedScene { id, next: None }) as Box<dyn Scene>)
    }

    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), self.id, format!("entered {}", self.id))
    }

    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), self.id, format!("fallback {}", self.id))
    }
}

/// Scene that moves to `topicB` only for callers stored in group "vip"
#[derive(Debug, Clone, Copy)]
pub struct GroupGateScene;

#[async_trait]
impl Scene for GroupGateScene {
    fn id(&self) -> &str {
        "gate"
    }

    async fn transition(&self, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
        let user = ctx.current_user().await?;
        (user.group == "vip").then(|| Box::new(ScriptedScene { id: "topicB", next: None }) as Box<dyn Scene>)
    }

    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), "gate", "entered gate")
    }

    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), "gate", "members only")
    }
}

/// Default catalog plus `topicA`, which moves to `next` (or stays when `None`),
/// `topicB`, and `gate`, which lets only "vip" callers through to `topicB`
pub fn topic_catalog(next: Option<&'static str>) -> SceneCatalog {
    SceneCatalog::default()
        .with_scene("topicA", move || Box::new(ScriptedScene { id: "topicA", next }))
        .with_scene("topicB", || Box::new(ScriptedScene { id: "topicB", next: None }))
        .with_scene("gate", || Box::new(GroupGateScene))
}
