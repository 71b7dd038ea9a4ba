//! Clients for outbound network access.

pub mod client;

pub use client::build_http_client;
