//! Test server launcher

use std::sync::Arc;

use AliceSkill::config::Settings;
use AliceSkill::handlers::{create_router, AppState};
use AliceSkill::services::UserStore;
use AliceSkill::state::SceneCatalog;

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn_test_server(catalog: SceneCatalog, users: Arc<dyn UserStore>) -> String {
    let state = AppState::new(Settings::default(), catalog, users).unwrap();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}
