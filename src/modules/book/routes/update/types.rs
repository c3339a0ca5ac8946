pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub title: Option<String>,
        pub author: Option<String>,
        pub description: Option<String>,
        pub published_year: Option<i32>,
        pub image: Option<String>,
        pub video: Option<String>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::book::repository::Book;

    pub enum Success {
        BookUpdated(Book),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookUpdated(book) => (StatusCode::OK, Json(json!(book))).into_response(),
            }
        }
    }

    pub enum Error {
        MediaUploadFailed,
        BookNotFound,
        BookUpdateFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MediaUploadFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload media" })),
                )
                    .into_response(),
                Self::BookNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Book not found" })),
                )
                    .into_response(),
                Self::BookUpdateFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Book update failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
