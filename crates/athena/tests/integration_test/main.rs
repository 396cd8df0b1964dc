//! Integration tests for athena-executor-athena.
//!
//! Everything here needs AWS credentials and network access, so tests are
//! `#[ignore]` and must be run explicitly.

mod session;
