//! Test server harness.

use nestrank::catalog::{Article, InMemoryArticleStore, StoryCatalog};
use nestrank::gateway::{HandlerState, create_router_with_state};
use nestrank::ranking::ArticleRanker;
use nestrank::scoring::RelevanceScorer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    /// Port to bind; 0 picks a free ephemeral port.
    pub port: u16,
    /// Catalog to serve; `None` uses the seeded catalog.
    pub articles: Option<Vec<Article>>,
    /// Per-request candidate bound; `None` uses the default.
    pub max_candidates: Option<usize>,
}

impl TestServerConfig {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Some(articles),
            ..Self::default()
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a self-contained test server with no external dependencies.
///
/// The relevance model runs in stub mode (deterministic scores from the built-in
/// formula, no ONNX artifact on disk) and the article and story catalogs come from
/// the bundled seed data unless `config.articles` supplies a custom catalog. That
/// makes every response fully deterministic, so tests can assert exact ranking
/// orders.
///
/// # Example
///
/// ```ignore
/// let server = spawn_test_server(TestServerConfig::default()).await?;
/// let client = reqwest::Client::new();
/// let resp = client.get(format!("{}/healthz", server.url())).send().await?;
/// assert!(resp.status().is_success());
/// ```
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let store = match config.articles {
        Some(articles) => InMemoryArticleStore::new(articles),
        None => InMemoryArticleStore::seeded(),
    }
    .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let stories =
        StoryCatalog::seeded().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let ranker = match config.max_candidates {
        Some(bound) => ArticleRanker::new(Arc::new(RelevanceScorer::stub()), bound),
        None => ArticleRanker::stub(),
    };

    let state = HandlerState::new(Arc::new(store), Arc::new(ranker), Arc::new(stories));
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_available_port() {
        let port = find_available_port()
            .await
            .expect("Should find available port");
        assert!(port > 0);
    }

    #[tokio::test]
    async fn test_server_config_defaults() {
        let config = TestServerConfig::default();
        assert_eq!(config.port, 0);
        assert!(config.articles.is_none());
        assert!(config.max_candidates.is_none());
    }

    #[tokio::test]
    async fn test_server_helpers_are_callable() {
        let (shutdown_tx, _shutdown_rx) = oneshot::channel();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();

        let server = TestServer {
            addr,
            _server_handle: tokio::spawn(async {}),
            shutdown_tx: Some(shutdown_tx),
        };

        let _ = server.url();
        server.shutdown().await;
    }

    #[test]
    fn test_server_url_formatting() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let url = format!("http://{}", addr);
        assert_eq!(url, "http://127.0.0.1:8080");
    }
}
