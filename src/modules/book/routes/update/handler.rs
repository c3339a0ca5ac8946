use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::UpdatePermission, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

pub async fn handler(
    _: UpdatePermission,
    State(ctx): State<Arc<Context>>,
    Path(record_id): Path<String>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            id: record_id,
            body,
        },
    )
    .await
}
