//! Client configuration.
//!
//! The posts API this client was written against runs on a fixed local
//! endpoint, so the base URL is the single recognized option. There is no
//! environment or file lookup: construct a `Config` explicitly or take the
//! default.

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Options for `PostsClient`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the API, without the `/posts` suffix. A trailing slash is
    /// tolerated and stripped by the client.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_port_5000() {
        assert_eq!(Config::default().base_url, "http://localhost:5000");
    }
}
