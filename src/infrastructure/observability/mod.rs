//! Pull-on-demand observability for dexboard
//!
//! Metrics are collected in a private prometheus registry and rendered as
//! text when the host asks for them. Nothing listens on a socket.

pub mod metrics;

pub use metrics::Metrics;
