//! Application configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Path to the SQLite content database, relative to the site root.
    /// When empty, the server runs without storage and serves default
    /// content only.
    pub database: String,

    /// Admin dashboard password (intentionally a plain stub)
    pub admin_password: String,

    /// Directory of static assets served as-is (press kit, favicons)
    pub public_dir: String,

    /// Outbound email settings for the contact form
    pub mail: MailConfig,

    /// Image upload signing credentials
    pub uploads: UploadConfig,

    /// Personalized biography generation settings
    pub bio: BioConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: "stagefront.db".to_string(),
            admin_password: "password".to_string(),
            public_dir: "public".to_string(),
            mail: MailConfig::default(),
            uploads: UploadConfig::default(),
            bio: BioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a content database has been configured
    pub fn has_database(&self) -> bool {
        !self.database.trim().is_empty()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 4000,
        }
    }
}

/// Contact form email configuration
///
/// The contact form hands validated messages to an HTTP email API.
/// An empty `api_key` or `to` address means the integration is not
/// configured; submissions then fail with a user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub to: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.resend.com/emails".to_string(),
            api_key: String::new(),
            from: "website@localhost".to_string(),
            to: String::new(),
        }
    }
}

/// Image upload signing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UploadConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl UploadConfig {
    /// Signing needs the full credential set
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

/// Personalized biography generation configuration
///
/// Points at a chat-completions style endpoint. Left unconfigured, the
/// public site falls back to the stored general biography.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BioConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database, "stagefront.db");
        assert!(config.has_database());
        assert!(!config.uploads.is_configured());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
server:
  port: 8080
database: "content/site.db"
admin_password: s3cret
mail:
  api_key: re_123
  to: booking@example.com
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.database, "content/site.db");
        assert_eq!(config.admin_password, "s3cret");
        assert_eq!(config.mail.api_key, "re_123");
        // untouched sections keep their defaults
        assert_eq!(config.mail.api_url, "https://api.resend.com/emails");
    }

    #[test]
    fn test_empty_database_disables_storage() {
        let config: AppConfig = serde_yaml::from_str("database: \"\"").unwrap();
        assert!(!config.has_database());
    }
}
