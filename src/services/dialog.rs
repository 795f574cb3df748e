//! Dialog router
//!
//! The state machine behind every webhook call. There are two conceptual
//! states, reconstructed per request from the state token:
//!
//! * no prior scene: first turn of a session, the caller is onboarded and
//!   greeted by `Welcome` (new user) or `WelcomeDefault` (returning user);
//! * active scene: the scene named by the token decides whether to move on
//!   (`transition` then `reply` of the next scene) or stay (`fallback`).

use tracing::{debug, instrument};

use crate::alice::{AliceRequest, AliceResponse};
use crate::models::user::{CreateUserRequest, Platform};
use crate::services::user_store::{FirstContact, UserStore};
use crate::state::catalog::SceneCatalog;
use crate::state::context::SceneContext;
use crate::state::scenes::{Scene, Welcome, WelcomeDefault};
use crate::utils::errors::{AliceSkillError, Result};
use crate::utils::logging;

/// Routes one request; built fresh for every call from shared collaborators
pub struct DialogRouter<'a> {
    catalog: &'a SceneCatalog,
    users: &'a dyn UserStore,
    http: &'a reqwest::Client,
    platform: Platform,
}

impl<'a> DialogRouter<'a> {
    pub fn new(
        catalog: &'a SceneCatalog,
        users: &'a dyn UserStore,
        http: &'a reqwest::Client,
        platform: Platform,
    ) -> Self {
        Self {
            catalog,
            users,
            http,
            platform,
        }
    }

    fn context<'r>(&'r self, request: &'r AliceRequest) -> SceneContext<'r> {
        SceneContext::new(request, self.users, self.http)
    }

    /// Produce the reply for one inbound event
    #[instrument(skip_all, fields(prior_scene = request.prior_scene_id()))]
    pub async fn route(&self, request: &AliceRequest) -> Result<AliceResponse> {
        match request.prior_scene_id() {
            None => self.start_session(request).await,
            Some(scene_id) => Ok(self.continue_session(scene_id, request).await),
        }
    }

    /// First turn: onboard the caller, never evaluates transitions
    async fn start_session(&self, request: &AliceRequest) -> Result<AliceResponse> {
        let identity = request.identity().ok_or(AliceSkillError::MissingIdentity)?;
        debug!(identity = identity.as_str(), kind = identity.kind(), "Starting session");

        let registration = CreateUserRequest::first_contact(identity.as_str(), self.platform);
        let contact = self.users.get_or_create(registration).await?;
        logging::log_user_onboarding(identity.as_str(), contact.is_created());

        let ctx = self.context(request).with_user(contact.user());
        let (reply, branch) = match &contact {
            FirstContact::Returning(_) => (WelcomeDefault.reply(&ctx).await, "returning_user"),
            FirstContact::Created(_) => (Welcome.reply(&ctx).await, "new_user"),
        };

        logging::log_dialog_turn(Some(identity.as_str()), None, reply.scene(), branch);
        Ok(reply)
    }

    /// Later turns: resolve the current scene and either move on or fall back
    async fn continue_session(&self, scene_id: &str, request: &AliceRequest) -> AliceResponse {
        let current = self.catalog.resolve(scene_id);
        let ctx = self.context(request);
        let identity = request.identity();
        let identity = identity.as_ref().map(|i| i.as_str());

        match current.transition(&ctx).await {
            Some(next) => {
                let reply = next.reply(&ctx).await;
                logging::log_dialog_turn(identity, Some(current.id()), reply.scene(), "transition");
                reply
            }
            None => {
                let reply = current.fallback(&ctx).await;
                logging::log_dialog_turn(identity, Some(current.id()), reply.scene(), "fallback");
                reply
            }
        }
    }
}
