//! HTTP request helpers
//!
//! Functions that read already-parsed request metadata (headers, peer
//! address) handed over by an HTTP server.

pub mod client_ip;
