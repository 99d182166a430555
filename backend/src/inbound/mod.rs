//! Inbound adapters that translate domain outcomes into transport-specific
//! shapes while keeping framework details at the edge.
//!
//! HTTP lives under [`http`].

pub mod http;
