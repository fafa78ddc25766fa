// src/mail.rs
//
// Notification dispatch over SMTP.

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::consts::REQUEST_TIMEOUT_SECS;
use crate::config::mail::MailConfig;
use crate::error::{Error, Result};

/// Outbound alert channel. The runner only knows this seam; tests and
/// --dry-run substitute their own implementations.
pub trait Notifier {
    fn send(&self, subject: &str, body: &str) -> Result<()>;
}

pub struct SmtpNotifier {
    config: MailConfig,
}

impl SmtpNotifier {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let cfg = &self.config;
        let mut builder = if cfg.use_tls {
            SmtpTransport::starttls_relay(&cfg.smtp_host).map_err(notify_err)?
        } else {
            SmtpTransport::builder_dangerous(&cfg.smtp_host)
        };
        builder = builder
            .port(cfg.smtp_port)
            .timeout(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)));
        if let (Some(user), Some(pass)) = (&cfg.smtp_user, &cfg.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }
        Ok(builder.build())
    }
}

fn notify_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Notify(e.to_string())
}

impl Notifier for SmtpNotifier {
    fn send(&self, subject: &str, body: &str) -> Result<()> {
        let cfg = &self.config;
        let from: Mailbox = cfg.sender.parse().map_err(notify_err)?;
        let mut builder = Message::builder().from(from).subject(subject);
        for recipient in &cfg.recipients {
            builder = builder.to(recipient.parse().map_err(notify_err)?);
        }
        let message = builder.body(s!(body)).map_err(notify_err)?;
        self.transport()?.send(&message).map_err(notify_err)?;
        Ok(())
    }
}
