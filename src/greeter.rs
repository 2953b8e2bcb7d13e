//! The ConfigGreeter handler: resolve the recognized configuration keys,
//! build a request-scoped presentation model, and hand it to the renderer.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::HttpError;
use crate::render::Renderer;
use crate::settings::GreeterSettings;

/// Request-scoped key/value mapping handed to the render collaborator.
/// Constructed fresh per request, discarded after rendering.
pub type PresentationModel = BTreeMap<String, String>;

/// Shared immutable state: settings resolved at startup plus the template
/// environment.
pub struct AppState {
    pub settings: GreeterSettings,
    pub renderer: Renderer,
}

/// Assemble the application router.
///
/// Every route permits anonymous access: there is no authentication layer
/// and CORS is permissive. Unknown paths fall through to axum's plain 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

fn presentation_model(settings: &GreeterSettings) -> PresentationModel {
    let mut model = PresentationModel::new();
    model.insert("greetingMessage".to_string(), settings.greeting_message.clone());
    model.insert("numberValue".to_string(), settings.number_value.clone());
    model.insert(
        "customServiceUsername".to_string(),
        settings.custom_service_username.clone(),
    );
    model.insert("applicationName".to_string(), settings.application_name.clone());
    model.insert("spaceName".to_string(), settings.space_name.clone());
    model
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpError> {
    let model = presentation_model(&state.settings);
    let html = state.renderer.render_index(&model)?;
    Ok(Html(html))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "UP" }))
}
