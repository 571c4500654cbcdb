//! Configuration handling for the lookup service and the CLI.

use crate::lookup::select_endpoint;
use crate::transport::TransportConfig;
use crate::types::{PwnCheckError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_ENDPOINT_URL: &str = "http://haveibeenpwned.com/api/breachedaccount/";
pub const DEFAULT_SSL_ENDPOINT_URL: &str = "https://haveibeenpwned.com/api/breachedaccount/";
/// CA bundle shipped by the operating system.
pub const DEFAULT_CA_FILE: &str = "/etc/ssl/certs/ca-certificates.crt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn default_user_agent() -> String {
    format!(
        "pwncheck/{} (Have I Been Pwned client)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Have I Been Pwned CLI.
#[derive(Parser, Debug, Clone)]
#[command(name = "pwncheck")]
#[command(author, version, about = "Have I Been Pwned CLI", long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check if an email has been pwned
    Check(CheckConfig),
}

/// Configuration for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckConfig {
    /// The email to be checked
    pub email: String,

    /// Use SSL when connecting to the remote service
    #[arg(long)]
    pub ssl: bool,

    /// Use an alternative CA file
    #[arg(long, env = "PWNCHECK_CA_FILE")]
    pub ca_file: Option<PathBuf>,

    /// Use simple output, suitable for parsing
    #[arg(long)]
    pub plain: bool,

    /// Show the full error chain instead of just the error message
    #[arg(long)]
    pub show_exceptions: bool,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Custom User-Agent string
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Endpoint used for plain HTTP lookups
    #[arg(long, env = "PWNCHECK_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT_URL)]
    pub endpoint_url: String,

    /// Endpoint used for lookups over SSL
    #[arg(long, env = "PWNCHECK_SSL_ENDPOINT_URL", default_value = DEFAULT_SSL_ENDPOINT_URL)]
    pub ssl_endpoint_url: String,
}

impl CheckConfig {
    /// Get the service configuration for this check.
    pub fn service_config(&self) -> ServiceConfig {
        let defaults = ServiceConfig::default();

        ServiceConfig {
            use_tls: self.ssl,
            ca_file: self.ca_file.clone().or(defaults.ca_file),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            endpoint_url: self.endpoint_url.clone(),
            ssl_endpoint_url: self.ssl_endpoint_url.clone(),
            timeout_secs: Some(self.timeout),
        }
    }
}

/// Everything needed to build a [`BreachService`](crate::service::BreachService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Query `ssl_endpoint_url` over verified TLS instead of `endpoint_url`.
    pub use_tls: bool,
    /// CA bundle used when `use_tls` is set.
    pub ca_file: Option<PathBuf>,
    pub user_agent: String,
    pub endpoint_url: String,
    pub ssl_endpoint_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            use_tls: false,
            ca_file: Some(PathBuf::from(DEFAULT_CA_FILE)),
            user_agent: default_user_agent(),
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            ssl_endpoint_url: DEFAULT_SSL_ENDPOINT_URL.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Reject endpoint URLs that cannot be queried or do not match their
    /// transport (`endpoint_url` must be http, `ssl_endpoint_url` https),
    /// an empty user agent and a zero timeout. The CA file is checked later,
    /// when the transport is built.
    pub fn validate(&self) -> Result<()> {
        validate_endpoint("endpoint_url", &self.endpoint_url, &["http"])?;
        validate_endpoint("ssl_endpoint_url", &self.ssl_endpoint_url, &["https"])?;

        if self.user_agent.trim().is_empty() {
            return Err(PwnCheckError::Config(
                "user_agent cannot be empty".to_string(),
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err(PwnCheckError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// The base URL lookups are sent to.
    pub fn endpoint(&self) -> &str {
        select_endpoint(self.use_tls, &self.endpoint_url, &self.ssl_endpoint_url)
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            use_tls: self.use_tls,
            ca_file: self.ca_file.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn validate_endpoint(field: &str, value: &str, schemes: &[&str]) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| PwnCheckError::Config(format!("{}: invalid URL '{}': {}", field, value, e)))?;

    if !schemes.contains(&url.scheme()) {
        return Err(PwnCheckError::Config(format!(
            "{}: unsupported URL scheme '{}' (expected {})",
            field,
            url.scheme(),
            schemes.join(" or ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_check(args: &[&str]) -> CheckConfig {
        let mut argv = vec!["pwncheck", "check"];
        argv.extend_from_slice(args);
        match Config::try_parse_from(argv).unwrap().command {
            Commands::Check(check) => check,
        }
    }

    #[test]
    fn test_default_service_config_is_valid() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.use_tls);
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn test_endpoint_follows_tls_flag() {
        let config = ServiceConfig {
            use_tls: true,
            ..Default::default()
        };
        assert_eq!(config.endpoint(), DEFAULT_SSL_ENDPOINT_URL);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let config = ServiceConfig {
            endpoint_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PwnCheckError::Config(_))));

        let config = ServiceConfig {
            endpoint_url: "ftp://haveibeenpwned.com/api/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            endpoint_url: "https://haveibeenpwned.com/api/".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PwnCheckError::Config(_))));

        let config = ServiceConfig {
            ssl_endpoint_url: "http://haveibeenpwned.com/api/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_user_agent_and_zero_timeout() {
        let config = ServiceConfig {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_transport_config_mirrors_service_config() {
        let config = ServiceConfig {
            use_tls: true,
            ca_file: Some(PathBuf::from("/tmp/ca.pem")),
            user_agent: "agent".to_string(),
            timeout_secs: Some(7),
            ..Default::default()
        };
        let transport = config.transport_config();

        assert!(transport.use_tls);
        assert_eq!(transport.ca_file, Some(PathBuf::from("/tmp/ca.pem")));
        assert_eq!(transport.user_agent, "agent");
        assert_eq!(transport.timeout_secs, Some(7));
    }

    #[test]
    fn test_check_command_defaults() {
        let check = parse_check(&["foo@bar.com"]);
        assert_eq!(check.email, "foo@bar.com");
        assert!(!check.ssl);
        assert!(!check.plain);
        assert!(!check.show_exceptions);

        let service = check.service_config();
        assert!(!service.use_tls);
        assert_eq!(service.user_agent, default_user_agent());
        assert_eq!(service.timeout_secs, Some(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_check_command_flags() {
        let check = parse_check(&[
            "foo@bar.com",
            "--ssl",
            "--ca-file",
            "/tmp/ca.pem",
            "--plain",
            "--show-exceptions",
            "--timeout",
            "5",
            "--user-agent",
            "custom",
        ]);
        assert!(check.plain);
        assert!(check.show_exceptions);

        let service = check.service_config();
        assert!(service.use_tls);
        assert_eq!(service.ca_file, Some(PathBuf::from("/tmp/ca.pem")));
        assert_eq!(service.user_agent, "custom");
        assert_eq!(service.timeout_secs, Some(5));
        assert_eq!(service.endpoint(), service.ssl_endpoint_url);
    }

    #[test]
    fn test_check_command_requires_email() {
        assert!(Config::try_parse_from(["pwncheck", "check"]).is_err());
    }
}
