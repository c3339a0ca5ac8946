use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

/// Build the application router with every middleware layer attached.
/// Integration tests call this directly so they exercise the same stack
/// the binary serves.
pub fn build_router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/", modules::get_router())
        .with_state(ctx.clone())
        .layer(Extension(ctx))
        // Base64 video payloads get big; the limit bounds them, not JSON.
        .layer(DefaultBodyLimit::max(1024 * 1024 * 50))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = build_router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let addr = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(addr.clone())
            .await
            .unwrap_or_else(|err| {
                tracing::error!("Failed to bind {}: {}", addr, err);
                panic!("Failed to bind {}", addr)
            });

        tracing::info!("App is running on {}", addr);

        axum::serve(listener, self.router)
            .await
            .unwrap_or_else(|err| {
                tracing::error!("Server stopped unexpectedly: {}", err);
            });
    }
}
