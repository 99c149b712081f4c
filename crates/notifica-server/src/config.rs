use std::env;

use notifica_export::pdf::NotificationRenderer;
use notifica_export::styles::{DocumentStyles, Letterhead};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Requests carry base64 photos, so the limit is well above axum's 2 MB default.
pub const DEFAULT_BODY_LIMIT: usize = 32 * 1024 * 1024;

/// Process-level settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
    pub styles: DocumentStyles,
    pub letterhead: Letterhead,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
            styles: DocumentStyles::default(),
            letterhead: Letterhead::default(),
        }
    }
}

impl ServerConfig {
    /// Only the bind address comes from the environment (`HOST`, `PORT`).
    pub fn from_env() -> eyre::Result<Self> {
        let mut config = Self::default();
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| eyre::eyre!("invalid PORT {port:?}: {e}"))?;
        }
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn renderer(&self) -> NotificationRenderer {
        NotificationRenderer::new(self.styles.clone(), self.letterhead.clone())
    }
}
