pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::book::repository::Book;

    pub enum Success {
        Book(Book),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Book(book) => (StatusCode::OK, Json(json!(book))).into_response(),
            }
        }
    }

    pub enum Error {
        BookNotFound,
        FailedToFetchBook,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BookNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Book not found" })),
                )
                    .into_response(),
                Self::FailedToFetchBook => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch book" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
