use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.store
        .delete_many(payload.ids)
        .await
        .map_err(|_| response::Error::BookDeletionFailed)
        .map(response::Success::BooksDeleted)
}
