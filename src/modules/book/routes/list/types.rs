pub mod request {
    use crate::{modules::book::repository, utils::pagination::Pagination};

    pub type Filters = repository::Filters;

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::book::repository::Book, utils::pagination::Paginated};

    pub enum Success {
        PaginatedBooks(Paginated<Book>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaginatedBooks(books) => (StatusCode::OK, Json(json!(books))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchBooks,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchBooks => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch books" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
