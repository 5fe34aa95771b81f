//! A placeholder web service used when exercising container builds.
//!
//! The whole application is one route: `GET /` answers with a fixed line of
//! text so that anything able to reach the port can confirm the process is
//! alive. Everything else is bootstrap: configuration loading, tracing setup,
//! and a server that runs until the host sends a termination signal.

pub mod config;
pub mod http;
pub mod routes;
