pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub title: String,
        pub author: Option<String>,
        pub description: Option<String>,
        pub published_year: Option<i32>,
        /// Raw media reference on the way in, hosted URL after interception.
        pub image: Option<String>,
        pub video: Option<String>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::book::repository::Book;

    pub enum Success {
        BookCreated(Book),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookCreated(book) => {
                    (StatusCode::CREATED, Json(json!(book))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MediaUploadFailed,
        BookCreationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MediaUploadFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload media" })),
                )
                    .into_response(),
                Self::BookCreationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Book creation failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
