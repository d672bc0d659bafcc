//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use triage_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Raw HTTP server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// host = "127.0.0.1"
/// port = 8080
/// ```
///
/// The `PORT` environment variable overrides `port`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl FileServerConfig {
    /// Resolve the listen address, falling back to `0.0.0.0` on a bad host.
    pub fn parse_addr(&self) -> (SocketAddr, Vec<ConfigIssue>) {
        match self.host.parse::<IpAddr>() {
            Ok(ip) => (SocketAddr::new(ip, self.port), vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "server.host".to_string(),
                        value: self.host.clone(),
                        valid_values: vec!["<ip address>".to_string()],
                    },
                    message: format!(
                        "server.host: '{}' is not an IP address, falling back to '0.0.0.0'",
                        self.host
                    ),
                };
                (
                    SocketAddr::new(IpAddr::from([0, 0, 0, 0]), self.port),
                    vec![issue],
                )
            }
        }
    }

    /// Listen address with `--host`/`--port` applied.
    ///
    /// Only issues caused by the `host` override are returned; problems in
    /// the configured host already come out of [`super::FileConfig::validate`].
    pub fn listen_addr(
        &self,
        host: Option<String>,
        port: Option<u16>,
    ) -> (SocketAddr, Vec<ConfigIssue>) {
        let host_overridden = host.is_some();
        let server = Self {
            host: host.unwrap_or_else(|| self.host.clone()),
            port: port.unwrap_or(self.port),
        };
        let (addr, issues) = server.parse_addr();
        if host_overridden {
            (addr, issues)
        } else {
            (addr, vec![])
        }
    }
}
