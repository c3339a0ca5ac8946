use super::types::{request, response};
use crate::{
    modules::book::{media, repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, mut payload: request::Payload) -> response::Response {
    media::resolve_media_fields(
        ctx.uploader.as_ref(),
        &mut payload.image,
        &mut payload.video,
    )
    .await
    .map_err(|_| response::Error::MediaUploadFailed)?;

    ctx.store
        .create(repository::CreateBookPayload {
            title: payload.title,
            author: payload.author,
            description: payload.description,
            published_year: payload.published_year,
            image: payload.image,
            video: payload.video,
        })
        .await
        .map_err(|_| response::Error::BookCreationFailed)
        .map(response::Success::BookCreated)
}
