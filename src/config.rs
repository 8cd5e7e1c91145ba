use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    pub gateway: GatewayConfig,
    pub auth: AuthConfig,
    /// PostgreSQL connection URL for the identity and domain store
    #[serde(default)]
    pub postgres_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing bearer tokens
    pub jwt_secret: String,
    /// Token lifetime, fixed at startup
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
}

fn default_token_ttl_minutes() -> i64 {
    30
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "classboard.log"
use_json: false
rotation: "daily"
enable_tracing: true
gateway:
  host: "127.0.0.1"
  port: 9000
auth:
  jwt_secret: "s3cret"
  token_ttl_minutes: 45
postgres_url: "postgresql://u:p@localhost/db"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.auth.token_ttl_minutes, 45);
        assert_eq!(
            config.postgres_url.as_deref(),
            Some("postgresql://u:p@localhost/db")
        );
    }

    #[test]
    fn test_token_ttl_defaults_to_thirty_minutes() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "classboard.log"
use_json: false
rotation: "never"
enable_tracing: false
gateway:
  host: "0.0.0.0"
  port: 8080
auth:
  jwt_secret: "s3cret"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.auth.token_ttl_minutes, 30);
        assert!(config.postgres_url.is_none());
    }
}
