use crate::utils::pagination::{Paginated, Pagination};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    /// Hosted image URL once the media interceptor has run.
    pub image: Option<String>,
    /// Hosted video URL once the media interceptor has run.
    pub video: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct CreateBookPayload {
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub image: Option<String>,
    pub video: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub image: Option<String>,
    pub video: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Filters {
    pub search: Option<String>,
}

/// Persistence capability for the books collection. Route services only see
/// this trait; the Postgres implementation below is swapped for an in-memory
/// store in tests.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn create(&self, payload: CreateBookPayload) -> Result<Book, Error>;
    async fn find_by_id(&self, id: String) -> Result<Option<Book>, Error>;
    async fn find_many(
        &self,
        pagination: Pagination,
        filters: Filters,
    ) -> Result<Paginated<Book>, Error>;
    async fn find_all(&self) -> Result<Vec<Book>, Error>;
    async fn count(&self) -> Result<i64, Error>;
    async fn update_by_id(
        &self,
        id: String,
        payload: UpdateBookPayload,
    ) -> Result<Option<Book>, Error>;
    async fn delete_by_id(&self, id: String) -> Result<Option<Book>, Error>;
    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, Error>;
}

pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, payload: CreateBookPayload) -> Result<Book, Error> {
        sqlx::query_as::<_, Book>(
            "
            INSERT INTO books
            (id, title, author, description, published_year, image, video)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            ",
        )
        .bind(Ulid::new().to_string())
        .bind(payload.title)
        .bind(payload.author)
        .bind(payload.description)
        .bind(payload.published_year)
        .bind(payload.image)
        .bind(payload.video)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a book: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Book>, Error> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id.clone())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching book with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_many(
        &self,
        pagination: Pagination,
        filters: Filters,
    ) -> Result<Paginated<Book>, Error> {
        let items = sqlx::query_as::<_, Book>(
            "
            SELECT * FROM books
            WHERE (
                $1::text IS NULL
                OR title ILIKE '%' || $1 || '%'
                OR author ILIKE '%' || $1 || '%'
            )
            ORDER BY created_at DESC
            LIMIT $2
            OFFSET $3
            ",
        )
        .bind(filters.search.clone())
        .bind(pagination.per_page as i64)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many books: {}", err);
            Error::UnexpectedError
        })?;

        let total = sqlx::query_scalar::<_, i64>(
            "
            SELECT COUNT(id) FROM books
            WHERE (
                $1::text IS NULL
                OR title ILIKE '%' || $1 || '%'
                OR author ILIKE '%' || $1 || '%'
            )
            ",
        )
        .bind(filters.search)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count books: {}", err);
            Error::UnexpectedError
        })?;

        Ok(Paginated::new(
            items,
            total as u32,
            pagination.page,
            pagination.per_page,
        ))
    }

    async fn find_all(&self) -> Result<Vec<Book>, Error> {
        sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch all books: {}", err);
                Error::UnexpectedError
            })
    }

    async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to count books: {}", err);
                Error::UnexpectedError
            })
    }

    async fn update_by_id(
        &self,
        id: String,
        payload: UpdateBookPayload,
    ) -> Result<Option<Book>, Error> {
        sqlx::query_as::<_, Book>(
            "
            UPDATE books SET
                title = COALESCE($1, title),
                author = COALESCE($2, author),
                description = COALESCE($3, description),
                published_year = COALESCE($4, published_year),
                image = COALESCE($5, image),
                video = COALESCE($6, video),
                updated_at = NOW()
            WHERE
                id = $7
            RETURNING *
            ",
        )
        .bind(payload.title)
        .bind(payload.author)
        .bind(payload.description)
        .bind(payload.published_year)
        .bind(payload.image)
        .bind(payload.video)
        .bind(id.clone())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a book by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<Book>, Error> {
        sqlx::query_as::<_, Book>("DELETE FROM books WHERE id = $1 RETURNING *")
            .bind(id.clone())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete a book by id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, Error> {
        sqlx::query("DELETE FROM books WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map(|res| res.rows_affected())
            .map_err(|err| {
                tracing::error!("Error occurred while trying to delete books: {}", err);
                Error::UnexpectedError
            })
    }
}
