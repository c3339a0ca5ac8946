use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.store
        .find_many(payload.pagination, payload.filters)
        .await
        .map(response::Success::PaginatedBooks)
        .map_err(|_| response::Error::FailedToFetchBooks)
}
