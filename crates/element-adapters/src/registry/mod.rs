//! Block registry adapters.

mod http;

pub use http::HttpRegistryClient;
