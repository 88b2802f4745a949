//! Mirror server library entry.
//!
//! This crate wires config, shared state, the route table, and the response
//! writer into an axum application. It is consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod response;
pub mod router;
