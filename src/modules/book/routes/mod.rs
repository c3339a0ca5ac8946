mod count;
mod create;
mod delete;
mod delete_many;
mod export;
mod get;
mod list;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/", create::get_router())
        .nest("/", update::get_router())
        .nest("/", delete::get_router())
        .nest("/", delete_many::get_router())
        .nest("/", list::get_router())
        .nest("/", count::get_router())
        .nest("/", get::get_router())
        .nest("/", export::get_router())
}
