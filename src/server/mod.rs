//! HTTP server for the public site and the admin API
//!
//! Pages are rendered from the reconciled content document and cached; a
//! successful admin save invalidates the cache and notifies open pages over
//! a live-reload WebSocket so they refresh their stale render.

mod api;

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cache::PageCache;
use crate::config::AppConfig;
use crate::store::ContentRepository;
use crate::templates::TemplateRenderer;
use crate::Stagefront;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
pub struct ServerState {
    pub config: AppConfig,
    pub repo: ContentRepository,
    pub renderer: TemplateRenderer,
    pub page_cache: PageCache,
    pub reload_tx: broadcast::Sender<()>,
    pub live_reload: bool,
    pub http: reqwest::Client,
    pub public_dir: PathBuf,
}

/// Start the site server
pub async fn start(app: &Stagefront, ip: &str, port: u16, live_reload: bool) -> Result<()> {
    let repo = app.repository().await;
    let renderer = TemplateRenderer::new()?;
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        config: app.config.clone(),
        repo,
        renderer,
        page_cache: PageCache::new(),
        reload_tx,
        live_reload,
        http: reqwest::Client::new(),
        public_dir: app.public_dir.clone(),
    });

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(api::health))
        .route("/__livereload", get(livereload_handler))
        .route("/api/content", get(api::get_content))
        .route(
            "/api/admin/content",
            get(api::admin_get_content).put(api::admin_put_content),
        )
        .route("/api/contact", post(api::submit_contact))
        .route("/api/upload/sign", post(api::sign_upload_params))
        .route("/api/bio", post(api::personalized_bio))
        .fallback_service(ServeDir::new(&state.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if live_reload {
        println!("Live reload enabled. Pages refresh after admin saves.");
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Render (or serve the cached) public page
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    if let Some(html) = state.page_cache.get("index") {
        return Html(html).into_response();
    }

    let document = state.repo.load_document().await;
    let html = match state.renderer.render_index(&document) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render index page: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response();
        }
    };

    let html = if state.live_reload {
        inject_live_reload(&html)
    } else {
        html
    };

    state.page_cache.put("index", html.clone());
    Html(html).into_response()
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            // Wait for a content save
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            // Handle incoming messages (ping/pong)
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Inject the live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replace("</body>", LIVE_RELOAD_SCRIPT)
    } else {
        // If no </body> tag, append to end
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_live_reload_replaces_body_close() {
        let html = "<html><body><p>hi</p></body></html>";
        let injected = inject_live_reload(html);
        assert!(injected.contains("__livereload"));
        assert!(injected.ends_with("</html>"));
    }

    #[test]
    fn test_inject_live_reload_appends_without_body() {
        let injected = inject_live_reload("<p>fragment</p>");
        assert!(injected.starts_with("<p>fragment</p>"));
        assert!(injected.contains("__livereload"));
    }
}
