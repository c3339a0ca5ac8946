use super::service::service;
use crate::{modules::auth::middleware::ExportPermission, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(_: ExportPermission, State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    service(ctx).await
}
