//! Backend Worker Thread
//!
//! Runs inventory queries in a background thread so the UI keeps drawing.
//! Receives requests via channel, performs the HTTP call on a current-thread
//! tokio runtime, and sends the outcome back to the main thread.

use std::sync::mpsc::{Receiver, Sender};

use super::client::InventoryClient;
use super::types::{BackendError, BackendRequest, BackendResponse};

/// Spawn the backend worker thread
///
/// The thread exits once `request_rx` is closed or the UI stops listening.
pub fn spawn_worker(
    client: InventoryClient,
    request_rx: Receiver<BackendRequest>,
    response_tx: Sender<BackendResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: InventoryClient,
    request_rx: Receiver<BackendRequest>,
    response_tx: Sender<BackendResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start backend runtime: {}", e);
            drain_with_error(&request_rx, &response_tx, &e.to_string());
            return;
        }
    };

    log::debug!("Backend worker started for {}", client.endpoint());

    while let Ok(request) = request_rx.recv() {
        let response = runtime.block_on(handle_query(&client, request));
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("Backend worker thread shutting down");
}

/// Run one query and map its outcome to a response
async fn handle_query(client: &InventoryClient, request: BackendRequest) -> BackendResponse {
    let request_id = request.request_id;
    log::debug!("Sending request {}", request_id);

    match client.query(&request.query, &request.cancel_token).await {
        Ok(answer) => BackendResponse::Answer { request_id, answer },
        Err(BackendError::Cancelled) => {
            log::debug!("Cancelled request {}", request_id);
            BackendResponse::Cancelled { request_id }
        }
        Err(error) => BackendResponse::Failed { request_id, error },
    }
}

/// Fail every request when no runtime could be built
fn drain_with_error(
    request_rx: &Receiver<BackendRequest>,
    response_tx: &Sender<BackendResponse>,
    message: &str,
) {
    while let Ok(request) = request_rx.recv() {
        let response = BackendResponse::Failed {
            request_id: request.request_id,
            error: BackendError::Network(message.to_string()),
        };
        if response_tx.send(response).is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
