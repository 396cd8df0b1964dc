//! Integration tests for athena-executor-core.
//!
//! Exercise the public decomposition and configuration entry points the way
//! the executor binary uses them.

mod config;
mod script;
