//! # Client Configuration
//!
//! The two externally configured values: where the REST API lives and
//! where the push channel connects. Nothing else about the client is
//! environment-dependent.

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL, including the `/api` prefix.
    pub api_url: String,
    /// WebSocket endpoint for the push channel.
    pub socket_url: String,
}

impl ClientConfig {
    /// Start building a configuration with development defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Origin of the API server without the `/api` prefix.
    ///
    /// Server-relative asset paths (uploaded avatars) are resolved against
    /// this.
    #[must_use]
    pub fn api_origin(&self) -> String {
        let trimmed = self.api_url.trim_end_matches('/');
        trimmed
            .strip_suffix("/api")
            .unwrap_or(trimmed)
            .to_string()
    }

    /// Resolve a possibly server-relative URL against the API origin.
    #[must_use]
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else {
            format!("{}{}", self.api_origin(), path_or_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder with sensible defaults for local development.
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    api_url: String,
    socket_url: String,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            api_url: "http://localhost:5000/api".to_string(),
            socket_url: "ws://localhost:5000/ws".to_string(),
        }
    }

    /// Override the REST base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Override the push channel URL.
    pub fn socket_url(mut self, url: impl Into<String>) -> Self {
        self.socket_url = url.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url,
            socket_url: self.socket_url,
        }
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_strips_api_suffix() {
        let config = ClientConfig::builder()
            .api_url("https://tasks.example.com/api")
            .build();
        assert_eq!(config.api_origin(), "https://tasks.example.com");
    }

    #[test]
    fn absolute_url_leaves_full_urls_alone() {
        let config = ClientConfig::default();
        assert_eq!(
            config.absolute_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            config.absolute_url("/uploads/a.png"),
            "http://localhost:5000/uploads/a.png"
        );
    }
}
