pub mod auth;
pub mod book;

mod router;
pub use router::get_router;
