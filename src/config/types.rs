use serde::Deserialize;

/// Browser-like User-Agent sent with every outbound request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Linkprobe
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Outbound request behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Per-request deadline in seconds
    pub timeout_secs: u64,

    /// Maximum redirect hops followed by the transport
    pub max_redirects: usize,

    /// Maximum links resolved at once for a single seed
    pub max_concurrent_links: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            max_redirects: 10,
            max_concurrent_links: 32,
        }
    }
}

/// Batch admission limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BatchConfig {
    /// Maximum number of seed URLs in one batch
    pub max_urls: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_urls: 20 }
    }
}

/// Allowlist used by redirect-tracking extraction
///
/// The first substring identifies the shortener domain and the second the
/// destination domain; the batch summary counts links between the two.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub substrings: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            substrings: vec!["aka.ms".to_string(), "query.prod".to_string()],
        }
    }
}

/// HTTP API server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}
