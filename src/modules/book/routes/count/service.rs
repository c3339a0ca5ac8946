use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.store
        .count()
        .await
        .map(response::Success::BookCount)
        .map_err(|_| response::Error::FailedToCountBooks)
}
