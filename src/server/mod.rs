//! HTTP server: JSON API plus optional static frontend

mod error;
mod handlers;
mod validation;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::content::ContentLoader;
use crate::store::{BlogStore, MessageStore};
use crate::AiBlaze;

pub use error::ApiError;
pub use validation::{FieldError, Validate};

/// State shared by all handlers
pub struct AppState {
    pub config: SiteConfig,
    pub blogs: RwLock<BlogStore>,
    pub messages: RwLock<MessageStore>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: SiteConfig, blogs: BlogStore) -> Self {
        Self {
            config,
            blogs: RwLock::new(blogs),
            messages: RwLock::new(MessageStore::new()),
        }
    }

    /// Load posts from the content directory and build fresh stores
    pub fn load(app: &AiBlaze) -> Self {
        let posts = ContentLoader::new(app).load_posts();
        let blogs = BlogStore::from_posts(posts, &app.config.author);
        Self::new(app.config.clone(), blogs)
    }
}

/// Routes under `/api`
fn api_router() -> Router<SharedState> {
    Router::new()
        .route("/blogs", get(handlers::list_blogs))
        .route("/blogs/featured", get(handlers::list_featured))
        .route("/blogs/related/:id", get(handlers::related_blogs))
        .route("/blogs/:slug", get(handlers::get_blog))
        .route("/categories", get(handlers::list_categories))
        .route("/contact", post(handlers::submit_contact))
        .route("/comments", post(handlers::submit_comment))
        .route("/comments/:blog_id", get(handlers::list_comments))
        .route("/sitemap.xml", get(handlers::sitemap))
        .fallback(handlers::api_not_found)
}

/// Build the application router.
///
/// When `public_dir` exists its files are served for non-API paths, with
/// `index.html` answering client-side routes.
pub fn build_router(state: SharedState, public_dir: Option<&Path>) -> Router {
    let mut router = Router::new().nest("/api", api_router());

    if let Some(dir) = public_dir.filter(|dir| dir.is_dir()) {
        tracing::info!("Serving static files from {:?}", dir);
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn start(app: &AiBlaze, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::load(app));
    {
        let blogs = state.blogs.read().await;
        tracing::info!("Serving {} posts", blogs.len());
    }

    let router = build_router(state, Some(app.public_dir.as_path()));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
