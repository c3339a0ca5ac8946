pub mod response {
    use axum::{
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use serde_json::json;

    pub enum Success {
        BooksCsv(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BooksCsv(csv) => (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                        (
                            header::CONTENT_DISPOSITION,
                            "attachment; filename=\"books.csv\"",
                        ),
                    ],
                    csv,
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToFetchBooks,
        FailedToExportBooks,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchBooks => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch books" })),
                )
                    .into_response(),
                Self::FailedToExportBooks => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to export books" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
