use serde::Deserialize;

/// Service metadata and CORS allow-list. Compiled in, never read from the
/// environment.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub project_name: String,
    pub version: String,
    pub api_prefix: String,
    pub allowed_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            project_name: "Bigkas Backend".to_string(),
            version: "1.0.0".to_string(),
            api_prefix: "/api/v1".to_string(),
            allowed_origins: vec![
                // Vite (React web app)
                "http://localhost:5173".to_string(),
                // Expo (React Native mobile app)
                "http://localhost:19006".to_string(),
                "http://localhost:3000".to_string(),
                // Render production backend
                "https://bigkas-backend.onrender.com".to_string(),
            ],
        }
    }
}

/// Prefix for every environment variable read by [`ListenConfig`].
pub const ENV_PREFIX: &str = "BIGKAS_";

/// Where and how the process listens. Only hosting knobs live here.
#[derive(Clone, Debug, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_size() -> u64 {
    50
}

impl ListenConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_request_body_bytes(&self) -> usize {
        // Allow some overhead for multipart boundaries/headers.
        ((self.max_upload_size_mb + 1) * 1024 * 1024) as usize
    }
}
