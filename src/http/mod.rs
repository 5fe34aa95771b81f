//! HTTP server bootstrap.
//!
//! The server runs plain HTTP (TLS is the reverse proxy's job in the
//! deployments this binary targets) and shuts down gracefully on
//! SIGTERM/SIGINT so containers drain connections before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
