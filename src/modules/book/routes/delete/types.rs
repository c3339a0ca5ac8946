pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BookDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        BookNotFound,
        BookDeletionFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Book not found" })),
                )
                    .into_response(),
                Self::BookDeletionFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Book deletion failed" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
