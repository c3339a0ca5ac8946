use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::CreatePermission, types::Context};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub async fn handler(
    _: CreatePermission,
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<request::Payload>,
) -> impl IntoResponse {
    service(ctx, payload).await
}
