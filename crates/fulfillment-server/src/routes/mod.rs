pub mod health;
pub mod webhook;

use axum::Router;
use crate::state::AppState;

pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(webhook::routes(state))
        .merge(health::routes())
}
