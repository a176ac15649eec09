use axum::{extract::State, routing::post, Json, Router};
use dialogflow_fulfillment::{Context, WebhookClient};
use serde_json::Value;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

async fn handler(
    State(state): State<AppState>,
    Json(request): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let mut agent = WebhookClient::new(&request)?;
    info!(
        intent = agent.intent(),
        version = %agent.agent_version(),
        source = ?agent.request_source(),
        "Received webhook request"
    );

    let text = state.fulfillment.response_for(agent.intent()).to_string();
    agent.reply(text);

    if state.fulfillment.keep_contexts {
        let incoming = agent.contexts().map(<[Context]>::to_vec).unwrap_or_default();
        for context in incoming {
            agent.set_outgoing_context(context)?;
        }
    }

    Ok(Json(agent.render()))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(handler))
        .with_state(state)
}
