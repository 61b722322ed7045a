//! Configuration module

mod app;

pub use app::AppConfig;
pub use app::BioConfig;
pub use app::MailConfig;
pub use app::ServerConfig;
pub use app::UploadConfig;
