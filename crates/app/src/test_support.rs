//! Helpers shared by tests that talk to a local backend.

use axum::Router;
use shared_types::ApiConfig;

use crate::api::ConsultationClient;

/// Serve `router` on an ephemeral port and return a client pointed at it.
pub async fn client_for(router: Router) -> ConsultationClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ConsultationClient::new(ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    })
}

/// A client whose base URL points at a port nothing listens on.
pub async fn unreachable_client() -> ConsultationClient {
    // Bind then drop to get a free port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ConsultationClient::new(ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 2,
    })
}
