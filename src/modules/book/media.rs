use crate::utils::storage::{self, MediaUploader};

/// Swap raw media references on an inbound book payload for hosted URLs.
///
/// A field holding `Some` non-empty value is treated as a raw upload source
/// (remote URL, base64 data URI, ...) and pushed to the hosting service; the
/// field is then overwritten with the returned secure URL. Empty or absent
/// fields are left untouched. The image is resolved before the video, and a
/// failed upload aborts the whole operation before anything is persisted.
pub async fn resolve_media_fields(
    uploader: &dyn MediaUploader,
    image: &mut Option<String>,
    video: &mut Option<String>,
) -> Result<(), storage::Error> {
    if let Some(source) = image.as_ref().filter(|s| !s.is_empty()).cloned() {
        let media = uploader.upload_image(&source).await?;
        *image = Some(media.url);
    }

    if let Some(source) = video.as_ref().filter(|s| !s.is_empty()).cloned() {
        let media = uploader.upload_video(&source).await?;
        *video = Some(media.url);
    }

    Ok(())
}
