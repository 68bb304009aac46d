//! HTTP server configuration object and helpers.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration with an explicit bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Read configuration from the environment.
    ///
    /// `BIND_ADDR` overrides the listen address; an unparsable value falls
    /// back to the default so a typo cannot leave the service unreachable
    /// on a surprising port.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_bind_var(env::var("BIND_ADDR").ok().as_deref())
    }

    fn from_bind_var(raw: Option<&str>) -> Self {
        let fallback = || {
            DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)))
        };
        let bind_addr = match raw {
            Some(value) => value.parse().unwrap_or_else(|e| {
                warn!(value, error = %e, "invalid BIND_ADDR, using default");
                fallback()
            }),
            None => fallback(),
        };
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
