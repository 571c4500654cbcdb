//! Breach lookup module.
//!
//! Builds the lookup URL for an email, sends the request through a
//! [`Transport`](crate::transport::Transport) and turns the HTTP response
//! into a [`LookupResult`](crate::types::LookupResult).

pub mod client;
mod request;

pub use client::{parse_breach_sites, BreachClient};
pub use request::{encode_email, select_endpoint, LookupRequest};
