pub mod media;
pub mod repository;
pub mod routes;
