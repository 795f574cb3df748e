//! Dialog scenes
//!
//! A scene is one conversational topic. Scenes carry no per-user state between
//! turns: each decision is made from the per-request `SceneContext`, and every
//! reply embeds the id of the scene that is active afterwards so Alice can echo
//! it back.

use std::fmt;

use async_trait::async_trait;

use super::context::SceneContext;
use crate::alice::AliceResponse;

/// Scene identifiers used in the state token
pub mod ids {
    pub const WELCOME: &str = "welcome";
    pub const WELCOME_DEFAULT: &str = "welcome_default";
    pub const HELP: &str = "help";
    pub const GOODBYE: &str = "goodbye";
}

/// Built-in Alice intents the scenes react to
pub mod intents {
    pub const HELP: &str = "YANDEX.HELP";
    pub const WHAT_CAN_YOU_DO: &str = "YANDEX.WHAT_CAN_YOU_DO";
    pub const REPEAT: &str = "YANDEX.REPEAT";
}

/// Capability shared by every scene
#[async_trait]
pub trait Scene: Send + Sync + fmt::Debug {
    /// Identifier written into the state token
    fn id(&self) -> &str;

    /// Decide whether the request moves the conversation to another scene.
    /// `None` keeps the conversation in this scene.
    async fn transition(&self, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>>;

    /// Reply produced when this scene is entered
    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse;

    /// Reply produced when no transition matched; stays in this scene
    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse;
}

fn mentions(ctx: &SceneContext<'_>, words_key: &str) -> bool {
    ctx.request().mentions_any(&ctx.messages().list(words_key))
}

fn wants_help(ctx: &SceneContext<'_>) -> bool {
    let request = ctx.request();
    request.has_intent(intents::HELP)
        || request.has_intent(intents::WHAT_CAN_YOU_DO)
        || mentions(ctx, "words.help")
}

/// Transitions available from every built-in scene, in priority order
fn common_transition(current: &str, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
    if mentions(ctx, "words.exit") {
        return Some(Box::new(Goodbye));
    }

    if current != ids::HELP && wants_help(ctx) {
        return Some(Box::new(Help));
    }

    if mentions(ctx, "words.restart") {
        return Some(Box::new(WelcomeDefault));
    }

    None
}

fn buttons<'a>(ctx: &SceneContext<'a>, keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| ctx.messages().t(key)).collect()
}

fn generic_fallback(scene: &str, ctx: &SceneContext<'_>) -> AliceResponse {
    let messages = ctx.messages();
    let text = format!("{} {}", messages.pick("fallback.phrases"), messages.t("fallback.hint"));
    AliceResponse::new(ctx.version(), scene, text)
        .with_buttons(buttons(ctx, &["buttons.help", "buttons.exit"]))
}

/// Entry scene for users seen for the first time
#[derive(Debug, Clone, Copy, Default)]
pub struct Welcome;

#[async_trait]
impl Scene for Welcome {
    fn id(&self) -> &str {
        ids::WELCOME
    }

    async fn transition(&self, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
        common_transition(self.id(), ctx)
    }

    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), self.id(), ctx.messages().t("welcome.new_user"))
            .with_buttons(buttons(ctx, &["buttons.help", "buttons.exit"]))
    }

    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        generic_fallback(self.id(), ctx)
    }
}

/// Entry scene for returning users; greets them with their group when one is set
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeDefault;

#[async_trait]
impl Scene for WelcomeDefault {
    fn id(&self) -> &str {
        ids::WELCOME_DEFAULT
    }

    async fn transition(&self, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
        common_transition(self.id(), ctx)
    }

    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        let messages = ctx.messages();
        let text = match ctx.current_user().await {
            Some(user) if !user.group.is_empty() => {
                messages.t_with("welcome.returning_with_group", &[("group", user.group.as_str())])
            }
            _ => messages.t("welcome.returning"),
        };

        AliceResponse::new(ctx.version(), self.id(), text)
            .with_buttons(buttons(ctx, &["buttons.help", "buttons.exit"]))
    }

    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        generic_fallback(self.id(), ctx)
    }
}

/// Describes what the skill can do
#[derive(Debug, Clone, Copy, Default)]
pub struct Help;

#[async_trait]
impl Scene for Help {
    fn id(&self) -> &str {
        ids::HELP
    }

    async fn transition(&self, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
        common_transition(self.id(), ctx)
    }

    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), self.id(), ctx.messages().t("help.text"))
            .with_buttons(buttons(ctx, &["buttons.start", "buttons.exit"]))
    }

    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        // Asking for help again or to repeat just restates it
        if ctx.request().has_intent(intents::REPEAT) || wants_help(ctx) {
            return self.reply(ctx).await;
        }

        let messages = ctx.messages();
        let text = format!("{} {}", messages.pick("fallback.phrases"), messages.t("help.text"));
        AliceResponse::new(ctx.version(), self.id(), text)
            .with_buttons(buttons(ctx, &["buttons.start", "buttons.exit"]))
    }
}

/// Ends the session
#[derive(Debug, Clone, Copy, Default)]
pub struct Goodbye;

#[async_trait]
impl Scene for Goodbye {
    fn id(&self) -> &str {
        ids::GOODBYE
    }

    async fn transition(&self, ctx: &SceneContext<'_>) -> Option<Box<dyn Scene>> {
        common_transition(self.id(), ctx)
    }

    async fn reply(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        AliceResponse::new(ctx.version(), self.id(), ctx.messages().t("goodbye.text")).end_session()
    }

    async fn fallback(&self, ctx: &SceneContext<'_>) -> AliceResponse {
        self.reply(ctx).await
    }
}
