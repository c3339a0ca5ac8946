use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.store
        .delete_by_id(payload.id)
        .await
        .map_err(|_| response::Error::BookDeletionFailed)?
        .ok_or(response::Error::BookNotFound)
        .map(|_| response::Success::BookDeleted)
}
