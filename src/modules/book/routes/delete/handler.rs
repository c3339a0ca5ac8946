use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::DeletePermission, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    _: DeletePermission,
    State(ctx): State<Arc<Context>>,
    Path(record_id): Path<String>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id: record_id }).await
}
