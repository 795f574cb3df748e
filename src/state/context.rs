//! Per-request scene context
//!
//! Everything a scene may consult while deciding and replying: the inbound
//! request, the user store, an outbound HTTP client and the message table.
//! Built by the dialog router for one request and dropped with it.

use tracing::warn;

use crate::alice::AliceRequest;
use crate::i18n::Messages;
use crate::models::user::User;
use crate::services::user_store::UserStore;

pub struct SceneContext<'a> {
    request: &'a AliceRequest,
    users: &'a dyn UserStore,
    http: &'a reqwest::Client,
    messages: &'a Messages,
    known_user: Option<&'a User>,
}

impl<'a> SceneContext<'a> {
    pub fn new(request: &'a AliceRequest, users: &'a dyn UserStore, http: &'a reqwest::Client) -> Self {
        Self {
            request,
            users,
            http,
            messages: Messages::russian(),
            known_user: None,
        }
    }

    /// Use another message table
    pub fn with_messages(mut self, messages: &'a Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Caller record already loaded by the router
    pub fn with_user(mut self, user: &'a User) -> Self {
        self.known_user = Some(user);
        self
    }

    pub fn request(&self) -> &'a AliceRequest {
        self.request
    }

    pub fn users(&self) -> &'a dyn UserStore {
        self.users
    }

    pub fn http(&self) -> &'a reqwest::Client {
        self.http
    }

    pub fn messages(&self) -> &'a Messages {
        self.messages
    }

    /// Protocol version to echo in replies
    pub fn version(&self) -> &'a str {
        self.request.version()
    }

    /// Stored record of the caller.
    ///
    /// Uses the record loaded by the router when there is one, otherwise looks
    /// the caller up. Store failures are logged and read as "unknown".
    pub async fn current_user(&self) -> Option<User> {
        if let Some(user) = self.known_user {
            return Some(user.clone());
        }

        let identity = self.request.identity()?;
        match self.users.get(identity.as_str()).await {
            Ok(user) => user,
            Err(e) => {
                warn!(identity = identity.as_str(), error = %e, "User lookup from scene failed");
                None
            }
        }
    }
}
