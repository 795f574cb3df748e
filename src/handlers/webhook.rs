//! Alice webhook handler
//!
//! One POST per user utterance. Bodies that do not parse surface as
//! `MalformedEvent`.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use super::AppState;
use crate::alice::{AliceRequest, AliceResponse};
use crate::services::DialogRouter;
use crate::utils::errors::Result;

/// Handle an inbound Alice event
pub async fn handle_webhook(State(state): State<AppState>, body: Bytes) -> Result<Json<AliceResponse>> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("webhook", %request_id);

    async move {
        let tracker = state.logging.create_performance_span("webhook");
        let result = process_event(&state, &body).await;

        match &result {
            Ok(reply) => state.logging.log_reply(reply),
            Err(e) => state.logging.log_error(e, "webhook"),
        }
        if let Some(tracker) = tracker {
            tracker.complete(result.is_ok());
        }

        result.map(Json)
    }
    .instrument(span)
    .await
}

async fn process_event(state: &AppState, body: &[u8]) -> Result<AliceResponse> {
    let request = AliceRequest::parse(body)?;
    state.logging.log_event(&request);

    let router = DialogRouter::new(
        state.catalog.as_ref(),
        state.users.as_ref(),
        &state.http,
        state.settings.skill.platform,
    );
    router.route(&request).await
}
