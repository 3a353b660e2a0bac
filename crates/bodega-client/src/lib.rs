//! # bodega-client: REST Client for the Bodega Backend
//!
//! JSON over HTTP with a bearer-token session. This crate is the only part
//! of the workspace that touches the network; the stores and core rules
//! never see a socket.
//!
//! ## Endpoint Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Backend Contract                                 │
//! │                                                                         │
//! │  Auth       POST /login            POST /signup                         │
//! │  Sales      GET  /sales            POST /sales      DELETE /sales/:id   │
//! │  Suppliers  POST /suppliers/add    PUT  /suppliers/:id                  │
//! │             GET  /suppliers/:id    GET  /suppliers/all                  │
//! │  Debts      GET  /debts            GET  /debts/:id                      │
//! │             POST /debts/add        PUT  /debts/:id                      │
//! │  Inventory  POST /inventory/add    PUT  /inventory/:id                  │
//! │             GET  /inventory/category/:category                          │
//! │             GET  /inventory/supplier/:supplier                          │
//! │             GET  /inventory/search?category=&supplier=                  │
//! │  Reports    GET  /reports/generate?period=&startDate=&endDate=          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Behavior
//! A 401 clears the held token/account and surfaces [`ClientError::Auth`];
//! every other failed response surfaces the server-provided message (or a
//! generic fallback) as [`ClientError::Api`]. There is no retry or backoff:
//! calls are fire-and-forget request/response, and a failure leaves caller
//! state unchanged.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::Session;
