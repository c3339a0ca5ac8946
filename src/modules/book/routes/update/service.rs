use super::types::{request, response};
use crate::{
    modules::book::{media, repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    media::resolve_media_fields(
        ctx.uploader.as_ref(),
        &mut payload.body.image,
        &mut payload.body.video,
    )
    .await
    .map_err(|_| response::Error::MediaUploadFailed)?;

    ctx.store
        .update_by_id(
            payload.id,
            repository::UpdateBookPayload {
                title: payload.body.title,
                author: payload.body.author,
                description: payload.body.description,
                published_year: payload.body.published_year,
                image: payload.body.image,
                video: payload.body.video,
            },
        )
        .await
        .map_err(|_| response::Error::BookUpdateFailed)?
        .ok_or(response::Error::BookNotFound)
        .map(response::Success::BookUpdated)
}
