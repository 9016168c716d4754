use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    // --- Completion Provider Args ---
    /// API key for the completion provider. Required unless demo mode is enabled.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "")]
    pub openai_api_key: String,

    /// Base URL for the completion provider API (e.g., https://api.openai.com)
    #[arg(long, env = "CHAT_BASE_URL")] // No default, let the client handle defaults if None
    pub chat_base_url: Option<String>,

    /// Model name for insight generation (e.g., gpt-4o-mini, gpt-4o)
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-4o-mini")]
    pub chat_model: String,

    /// Timeout in seconds for a single completion provider call.
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value = "30")]
    pub provider_timeout_secs: u64,

    // --- Rate Limiting Args ---
    /// Maximum generation requests per client identifier within one window.
    #[arg(long, env = "RATE_LIMIT", default_value = "10")]
    pub rate_limit: u32,

    /// Tighter per-client request limit applied while demo mode is active.
    #[arg(long, env = "DEMO_RATE_LIMIT", default_value = "5")]
    pub demo_rate_limit: u32,

    /// Rate limit window length in milliseconds.
    #[arg(long, env = "RATE_WINDOW_MS", default_value = "60000")]
    pub rate_window_ms: i64,

    // --- Demo Mode Args ---
    /// Serve canned insights instead of calling the completion provider.
    #[arg(long, env = "DEMO_MODE", default_value = "false")]
    pub demo_mode: bool,

    /// Tell clients to show demo-mode messaging. Display only; does not change
    /// how requests are handled.
    #[arg(long, env = "PUBLIC_DEMO_MODE", default_value = "false")]
    pub public_demo_mode: bool,

    /// Artificial latency in milliseconds before each canned demo response.
    #[arg(long, env = "DEMO_DELAY_MS", default_value = "1000")]
    pub demo_delay_ms: u64,

    // --- TLS Args ---
    /// Optional path to the TLS certificate file (PEM format) for enabling HTTPS. Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format) for enabling HTTPS. Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}
