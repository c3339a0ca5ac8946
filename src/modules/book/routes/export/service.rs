use super::types::response;
use crate::{modules::book::repository::Book, types::Context};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct BookExportRow<'a> {
    id: &'a str,
    title: &'a str,
    author: Option<&'a str>,
    description: Option<&'a str>,
    published_year: Option<i32>,
    image: Option<&'a str>,
    video: Option<&'a str>,
    created_at: String,
    updated_at: Option<String>,
}

fn to_export_row(book: &Book) -> BookExportRow<'_> {
    BookExportRow {
        id: &book.id,
        title: &book.title,
        author: book.author.as_deref(),
        description: book.description.as_deref(),
        published_year: book.published_year,
        image: book.image.as_deref(),
        video: book.video.as_deref(),
        created_at: book.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        updated_at: book
            .updated_at
            .map(|ts| ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
    }
}

fn books_to_csv(books: &[Book]) -> Result<String, response::Error> {
    let mut writer = csv::Writer::from_writer(vec![]);

    for book in books {
        writer.serialize(to_export_row(book)).map_err(|err| {
            tracing::error!("Failed to serialize book {} for export: {}", book.id, err);
            response::Error::FailedToExportBooks
        })?;
    }

    let bytes = writer.into_inner().map_err(|err| {
        tracing::error!("Failed to flush the csv export: {}", err);
        response::Error::FailedToExportBooks
    })?;

    String::from_utf8(bytes).map_err(|err| {
        tracing::error!("Csv export was not valid utf-8: {}", err);
        response::Error::FailedToExportBooks
    })
}

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let books = ctx
        .store
        .find_all()
        .await
        .map_err(|_| response::Error::FailedToFetchBooks)?;

    books_to_csv(&books).map(response::Success::BooksCsv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_book() -> Book {
        Book {
            id: "01J00000000000000000000000".to_string(),
            title: "The Left Hand of Darkness".to_string(),
            author: Some("Ursula K. Le Guin".to_string()),
            description: None,
            published_year: Some(1969),
            image: Some("https://res.example.com/image/upload/img-1".to_string()),
            video: None,
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn export_starts_with_a_header_row() {
        let csv = books_to_csv(&[sample_book()]).unwrap();
        let header = csv.lines().next().unwrap();

        assert_eq!(
            header,
            "id,title,author,description,published_year,image,video,created_at,updated_at"
        );
    }

    #[test]
    fn rows_carry_field_values_and_formatted_timestamps() {
        let csv = books_to_csv(&[sample_book()]).unwrap();
        let row = csv.lines().nth(1).unwrap();

        assert!(row.contains("The Left Hand of Darkness"));
        assert!(row.contains("1969"));
        assert!(row.contains("2024-06-01T12:30:00"));
    }

    #[test]
    fn empty_collection_exports_an_empty_document() {
        // The header row is only emitted alongside the first record.
        let csv = books_to_csv(&[]).unwrap();

        assert!(csv.is_empty());
    }
}
