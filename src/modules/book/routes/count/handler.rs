use super::service::service;
use crate::{modules::auth::middleware::ListPermission, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(_: ListPermission, State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx).await
}
