//! stagefront: an artist marketing site server with a lightweight content
//! manager
//!
//! One persisted Site Content document drives the whole public site. Reads
//! reconcile the stored document against canonical defaults so every field
//! the templates need is always present; writes replace the document after
//! validation. Storage is optional: without a database the site serves the
//! defaults.

pub mod bio;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod mail;
pub mod server;
pub mod store;
pub mod templates;
pub mod upload;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use config::AppConfig;
use store::ContentRepository;

/// The main application
#[derive(Clone)]
pub struct Stagefront {
    /// Application configuration
    pub config: AppConfig,
    /// Base directory (site root)
    pub base_dir: PathBuf,
    /// Static assets directory
    pub public_dir: PathBuf,
}

impl Stagefront {
    /// Create a new instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> anyhow::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            AppConfig::load(&config_path)?
        } else {
            AppConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Resolved content database path, if storage is configured
    pub fn database_path(&self) -> Option<PathBuf> {
        self.config
            .has_database()
            .then(|| self.base_dir.join(&self.config.database))
    }

    /// Open the content repository per the configuration
    pub async fn repository(&self) -> ContentRepository {
        ContentRepository::connect(self.database_path().as_deref()).await
    }
}
