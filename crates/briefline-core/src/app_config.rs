use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, loaded once at startup and passed into each
/// pipeline stage. Credentials are `Option` because their absence disables
/// the corresponding stage rather than failing startup.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub allowed_origin: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub enrich_timeout_secs: u64,
    pub resend_api_key: Option<String>,
    pub mail_from: String,
    pub pdf_enabled: bool,
    pub chrome_path: Option<PathBuf>,
    pub render_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("allowed_origin", &self.allowed_origin)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("openai_model", &self.openai_model)
            .field("enrich_timeout_secs", &self.enrich_timeout_secs)
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("mail_from", &self.mail_from)
            .field("pdf_enabled", &self.pdf_enabled)
            .field("chrome_path", &self.chrome_path)
            .field("render_timeout_secs", &self.render_timeout_secs)
            .finish()
    }
}
