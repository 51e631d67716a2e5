use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Caregiver Support";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the HTTP shell (loopback only).
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Care log sessions kept in memory before the oldest is evicted.
pub const MAX_SESSIONS: usize = 1024;

/// Environment variable that overrides [`DEFAULT_BIND_ADDR`].
pub const BIND_ADDR_ENV: &str = "CAREGIVER_SUPPORT_ADDR";

/// Safety note shown before any guidance.
pub const DISCLAIMER: &str = "\
### Important safety note (demo-only)
This app provides **general caregiver-support suggestions** using **simple rule-based text matching** (keywords + regex).
It is **not medical advice**, **not a diagnostic tool**, and **does not recommend medication changes**.

- If you think someone may be in **immediate danger**, call your local emergency number (e.g., **911 in the U.S.**) right now.
- For urgent or worsening concerns, contact a licensed clinician or local urgent care.
";

pub const ABOUT: &str = "This is a **demo-only** caregiver-support assistant built for workshops. \
It uses **regex + keywords**, no AI, no external APIs. \
**Non-diagnostic** • **No medication changes** • **Safety-forward**";

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "caregiver_support=info,tower_http=info"
}

/// Runtime configuration for the HTTP shell.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read the bind address from the environment, falling back to the
    /// default. An unparsable value is logged and ignored.
    pub fn from_env() -> Self {
        let raw = std::env::var(BIND_ADDR_ENV).ok();
        Self::from_value(raw.as_deref())
    }

    fn from_value(raw: Option<&str>) -> Self {
        let default_addr = default_bind_addr();
        let bind_addr = match raw {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    env = BIND_ADDR_ENV,
                    value,
                    error = %e,
                    "Invalid bind address, using default"
                );
                default_addr
            }),
            None => default_addr,
        };
        Self { bind_addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8787))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_matches_constant() {
        assert_eq!(ServerConfig::default().bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn explicit_addr_parsed() {
        let config = ServerConfig::from_value(Some("0.0.0.0:9000"));
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn invalid_addr_falls_back() {
        let config = ServerConfig::from_value(Some("not-an-address"));
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn disclaimer_is_safety_forward() {
        assert!(DISCLAIMER.contains("not medical advice"));
        assert!(DISCLAIMER.contains("emergency number"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
