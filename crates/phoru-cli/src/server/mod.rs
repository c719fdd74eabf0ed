//! HTTP front end: a web form at `/` and a plain-text API at `/phoru/`.
//!
//! Every request runs one independent translation against a shared,
//! immutable `Transliterator`.

pub mod handlers;
pub mod page;

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use phoru_core::Transliterator;
use tokio::net::{TcpListener, ToSocketAddrs};
use tracing::info;

pub const SERVER_ID: &str = concat!("phoru/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct AppState {
    pub transliterator: Arc<Transliterator>,
    pub sample_text: Arc<str>,
}

impl AppState {
    pub fn new(transliterator: Transliterator, sample_text: &str) -> Self {
        Self {
            transliterator: Arc::new(transliterator),
            sample_text: Arc::from(sample_text),
        }
    }
}

pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/phoru/", get(handlers::api).post(handlers::api))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::map_response(set_server_header))
        .with_state(state)
}

async fn set_server_header(mut res: Response) -> Response {
    res.headers_mut()
        .insert(header::SERVER, HeaderValue::from_static(SERVER_ID));
    res
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
///
/// The SIGTERM handler is installed before this returns.
fn shutdown_signal() -> io::Result<impl Future<Output = ()>> {
    #[cfg(unix)]
    let mut terminate =
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    Ok(async move {
        #[cfg(unix)]
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
        #[cfg(not(unix))]
        let _ = tokio::signal::ctrl_c().await;
        info!("shutdown signal received");
    })
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM.
pub async fn serve<A: ToSocketAddrs>(
    addr: A,
    state: AppState,
    body_limit: usize,
) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!("phoru listening on http://{local}");
    axum::serve(listener, router(state, body_limit))
        .with_graceful_shutdown(shutdown_signal()?)
        .await?;
    info!("phoru on {local} stopped");
    Ok(())
}
