// src/config/mail.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// SMTP settings, read from a JSON file before any network activity.
/// A missing or malformed file is fatal for the run.
#[derive(Clone, Debug, Deserialize)]
pub struct MailConfig {
    pub sender: String,
    pub recipients: Vec<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    #[serde(default)]
    pub smtp_user: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
}

fn default_use_tls() -> bool {
    true
}

impl MailConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file {} is missing; copy config.example.json and fill in your SMTP info",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let cfg: MailConfig = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        if cfg.recipients.is_empty() {
            return Err(Error::Config(s!("recipients list is empty")));
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let text = r#"{
            "sender": "watcher@example.com",
            "recipients": ["a@example.com", "b@example.com"],
            "smtp_host": "smtp.example.com",
            "smtp_port": 587,
            "use_tls": false,
            "smtp_user": "watcher",
            "smtp_password": "hunter2"
        }"#;
        let cfg: MailConfig = serde_json::from_str(text).unwrap();
        assert_eq!(cfg.recipients.len(), 2);
        assert!(!cfg.use_tls);
        assert_eq!(cfg.smtp_user.as_deref(), Some("watcher"));
    }

    #[test]
    fn tls_defaults_on_and_credentials_default_absent() {
        let text = r#"{
            "sender": "watcher@example.com",
            "recipients": ["a@example.com"],
            "smtp_host": "smtp.example.com",
            "smtp_port": 587
        }"#;
        let cfg: MailConfig = serde_json::from_str(text).unwrap();
        assert!(cfg.use_tls);
        assert!(cfg.smtp_user.is_none());
        assert!(cfg.smtp_password.is_none());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = MailConfig::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
