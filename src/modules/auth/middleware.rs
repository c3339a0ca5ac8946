use crate::types::Context;
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde_json::json;
use std::sync::Arc;

/// Collection actions an admin token can be checked against. Evaluation of
/// fine-grained permissions happens upstream; this layer only verifies that
/// the request carries the configured admin token.
#[derive(Clone, Copy, Debug)]
pub enum Action {
    Create,
    Update,
    Delete,
    List,
    Details,
    Export,
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Invalid authorization token" })),
    )
        .into_response()
}

fn get_token_from_header(header: &str) -> Option<&str> {
    header.split(' ').nth(1)
}

async fn check_permission(parts: &mut Parts, action: Action) -> Result<(), Response> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|_| unauthorized())?;

    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(unauthorized)?;

    match get_token_from_header(header) {
        Some(token) if token == ctx.auth.token => Ok(()),
        _ => {
            tracing::warn!("Rejected {:?} request with an invalid token", action);
            Err(unauthorized())
        }
    }
}

macro_rules! define_permission {
    ($name:ident, $action:expr) => {
        pub struct $name;

        #[async_trait]
        impl<S: Send + Sync> FromRequestParts<S> for $name {
            type Rejection = Response;

            async fn from_request_parts(
                parts: &mut Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                check_permission(parts, $action).await.map(|_| Self)
            }
        }
    };
}

define_permission!(CreatePermission, Action::Create);
define_permission!(UpdatePermission, Action::Update);
define_permission!(DeletePermission, Action::Delete);
define_permission!(ListPermission, Action::List);
define_permission!(DetailsPermission, Action::Details);
define_permission!(ExportPermission, Action::Export);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_the_second_segment_of_a_bearer_header() {
        assert_eq!(get_token_from_header("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn header_without_a_token_yields_none() {
        assert_eq!(get_token_from_header("Bearer"), None);
    }
}
