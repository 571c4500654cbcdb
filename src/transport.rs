//! HTTP transport construction.
//!
//! A [`Transport`] is a configured `reqwest` client plus a record of how its
//! TLS side was set up. With TLS enabled the client trusts only the CA bundle
//! named in the configuration, and rustls verifies both the peer certificate
//! chain and the hostname.

use crate::types::{PwnCheckError, Result};
use reqwest::{Certificate, Client};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Options used once to build a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub use_tls: bool,
    /// CA bundle in PEM format. Required when `use_tls` is set.
    pub ca_file: Option<PathBuf>,
    pub user_agent: String,
    /// Whole-request deadline. `None` leaves the client without a timeout.
    pub timeout_secs: Option<u64>,
}

/// How the transport authenticates the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportSecurity {
    /// Plain HTTP, no certificate configuration. Lookup endpoints for this
    /// mode are restricted to `http://` by `ServiceConfig::validate`.
    Plain,
    /// HTTPS only, peer and hostname verified against `ca_file`.
    Verified { ca_file: PathBuf },
}

/// A ready-to-use HTTP client.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    security: TransportSecurity,
}

impl Transport {
    /// Build a transport from its configuration.
    ///
    /// Redirects are never followed, so every lookup is a single request.
    ///
    /// Fails with [`PwnCheckError::InvalidCaFile`] before any network activity
    /// when TLS is requested and the CA file is unset, missing, unreadable,
    /// or holds no certificates.
    pub fn build(config: &TransportConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .use_rustls_tls()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let security = if config.use_tls {
            let ca_file = config.ca_file.as_deref().ok_or_else(|| PwnCheckError::InvalidCaFile {
                path: PathBuf::new(),
                reason: "no CA file configured".to_string(),
            })?;
            validate_ca_file(ca_file)?;

            builder = builder.tls_built_in_root_certs(false).https_only(true);
            for cert in load_ca_bundle(ca_file)? {
                builder = builder.add_root_certificate(cert);
            }

            debug!("Building TLS transport with CA file {}", ca_file.display());
            TransportSecurity::Verified {
                ca_file: ca_file.to_path_buf(),
            }
        } else {
            debug!("Building plain HTTP transport");
            TransportSecurity::Plain
        };

        let client = builder.build().map_err(PwnCheckError::ClientBuild)?;

        Ok(Self { client, security })
    }

    /// Wrap an existing client as a plain transport.
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            security: TransportSecurity::Plain,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn security(&self) -> &TransportSecurity {
        &self.security
    }

    pub fn verifies_peer(&self) -> bool {
        matches!(self.security, TransportSecurity::Verified { .. })
    }
}

/// Check that `path` names a readable regular file.
pub fn validate_ca_file(path: &Path) -> Result<()> {
    let invalid = |reason: String| PwnCheckError::InvalidCaFile {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_file() {
        return Err(invalid("not a regular file".to_string()));
    }
    File::open(path).map_err(|e| invalid(e.to_string()))?;

    Ok(())
}

fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>> {
    let invalid = |reason: String| PwnCheckError::InvalidCaFile {
        path: path.to_path_buf(),
        reason,
    };

    let pem = fs::read(path).map_err(|e| invalid(e.to_string()))?;
    let certs = Certificate::from_pem_bundle(&pem).map_err(|e| invalid(e.to_string()))?;
    if certs.is_empty() {
        return Err(invalid("no PEM certificates found".to_string()));
    }

    Ok(certs)
}
