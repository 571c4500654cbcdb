//! pwncheck - Have I Been Pwned breach lookup client.
//!
//! This library checks whether an email address appears in a known data breach by:
//! - Building a transport, either plain HTTP or TLS verified against a CA bundle
//! - Sending a single GET request for the URL-encoded email
//! - Mapping the HTTP status and JSON body to a [`LookupResult`]
//!
//! # Example
//!
//! ```no_run
//! use pwncheck::{BreachService, LookupResult, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = BreachService::new(ServiceConfig::default()).unwrap();
//!     match service.check_email("foo@bar.com").await.unwrap() {
//!         LookupResult::NotBreached => println!("Not pwned"),
//!         LookupResult::Breached { sites } => println!("Pwned on: {}", sites.join(", ")),
//!     }
//! }
//! ```

pub mod config;
pub mod lookup;
pub mod output;
pub mod service;
pub mod transport;
pub mod types;

pub use config::{CheckConfig, Commands, Config, ServiceConfig};
pub use lookup::{select_endpoint, BreachClient, LookupRequest};
pub use service::BreachService;
pub use transport::{Transport, TransportConfig, TransportSecurity};
pub use types::{LookupResult, PwnCheckError, Result};
