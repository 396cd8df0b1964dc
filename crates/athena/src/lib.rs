pub mod client;
pub mod connector;

pub use client::{AthenaError, AthenaSession, DEFAULT_QUERY_TIMEOUT_SECS};
pub use connector::AthenaConnector;
