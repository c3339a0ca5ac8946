use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use bookshelf_backend_rs::app::build_router;
use bookshelf_backend_rs::modules::book::repository::{
    Book, BookStore, CreateBookPayload, Error as StoreError, Filters, UpdateBookPayload,
};
use bookshelf_backend_rs::types::{AppContext, AuthContext, Context};
use bookshelf_backend_rs::utils::pagination::{Paginated, Pagination};
use bookshelf_backend_rs::utils::storage::{
    Error as UploadError, MediaUploader, UploadedMedia,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_TOKEN: &str = "test-admin-token";

/// In-memory stand-in for the Postgres store so route tests run without a
/// database.
#[derive(Default)]
pub struct MockBookStore {
    pub books: Mutex<Vec<Book>>,
}

impl MockBookStore {
    pub fn with_books(books: Vec<Book>) -> Arc<Self> {
        Arc::new(Self {
            books: Mutex::new(books),
        })
    }

    pub fn snapshot(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }
}

pub fn sample_book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: None,
        description: None,
        published_year: None,
        image: None,
        video: None,
        created_at: chrono::Utc::now().naive_utc(),
        updated_at: None,
    }
}

#[async_trait]
impl BookStore for MockBookStore {
    async fn create(&self, payload: CreateBookPayload) -> Result<Book, StoreError> {
        let mut books = self.books.lock().unwrap();
        let book = Book {
            id: format!("book-{}", books.len() + 1),
            title: payload.title,
            author: payload.author,
            description: payload.description,
            published_year: payload.published_year,
            image: payload.image,
            video: payload.video,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        };
        books.push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: String) -> Result<Option<Book>, StoreError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|book| book.id == id)
            .cloned())
    }

    async fn find_many(
        &self,
        pagination: Pagination,
        filters: Filters,
    ) -> Result<Paginated<Book>, StoreError> {
        let books = self.books.lock().unwrap();
        let matching: Vec<Book> = books
            .iter()
            .filter(|book| match filters.search.as_deref() {
                Some(search) => book.title.contains(search),
                None => true,
            })
            .cloned()
            .collect();

        let total = matching.len() as u32;
        let items = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.per_page as usize)
            .collect();

        Ok(Paginated::new(
            items,
            total,
            pagination.page,
            pagination.per_page,
        ))
    }

    async fn find_all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.snapshot())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.books.lock().unwrap().len() as i64)
    }

    async fn update_by_id(
        &self,
        id: String,
        payload: UpdateBookPayload,
    ) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.lock().unwrap();
        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            return Ok(None);
        };

        if let Some(title) = payload.title {
            book.title = title;
        }
        if payload.author.is_some() {
            book.author = payload.author;
        }
        if payload.description.is_some() {
            book.description = payload.description;
        }
        if payload.published_year.is_some() {
            book.published_year = payload.published_year;
        }
        if payload.image.is_some() {
            book.image = payload.image;
        }
        if payload.video.is_some() {
            book.video = payload.video;
        }
        book.updated_at = Some(chrono::Utc::now().naive_utc());

        Ok(Some(book.clone()))
    }

    async fn delete_by_id(&self, id: String) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.lock().unwrap();
        let position = books.iter().position(|book| book.id == id);

        Ok(position.map(|idx| books.remove(idx)))
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, StoreError> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|book| !ids.contains(&book.id));

        Ok((before - books.len()) as u64)
    }
}

/// Uploader that records every call and answers with predictable URLs.
#[derive(Default)]
pub struct MockUploader {
    pub uploads: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl MockUploader {
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }

    fn record(&self, kind: &str, source: &str) -> Result<UploadedMedia, UploadError> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((kind.to_string(), source.to_string()));

        if self.fail {
            return Err(UploadError::UploadFailed);
        }

        let public_id = format!("mock-{}", uploads.len());
        Ok(UploadedMedia {
            url: format!("https://res.cloudinary.test/{}/upload/{}", kind, public_id),
            public_id,
        })
    }
}

#[async_trait]
impl MediaUploader for MockUploader {
    async fn upload_image(&self, source: &str) -> Result<UploadedMedia, UploadError> {
        self.record("image", source)
    }

    async fn upload_video(&self, source: &str) -> Result<UploadedMedia, UploadError> {
        self.record("video", source)
    }
}

pub fn test_context(store: Arc<MockBookStore>, uploader: Arc<MockUploader>) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
            url: "http://127.0.0.1:0".to_string(),
        },
        auth: AuthContext {
            token: TEST_TOKEN.to_string(),
        },
        store,
        uploader,
    })
}

/// Build the application router exactly as the binary does, against mocks.
pub fn build_test_app(store: Arc<MockBookStore>, uploader: Arc<MockUploader>) -> Router {
    build_router(test_context(store, uploader))
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
