//! Inventory-query backend
//!
//! HTTP client for the inventory endpoint and the background worker that
//! runs it off the UI thread.

mod client;
pub mod types;
mod worker;

pub use client::InventoryClient;
pub use types::{BackendRequest, BackendResponse, QueryAnswer};
pub use worker::spawn_worker;
