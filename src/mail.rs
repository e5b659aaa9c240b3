//! Outbound email for the contact relay.
//!
//! Transport failures are reduced to [`MailFailure`], a closed set of
//! user-facing categories, by inspecting the SMTP error's kind, reply code
//! and I/O source rather than its message text.

use crate::config::{SmtpConfig, SmtpSecurity};
use crate::error::ConfigError;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::error::Error as StdError;
use std::fmt;
use std::io;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
pub struct OutgoingMail {
    /// Submitter's address; used as Reply-To when it parses as a mailbox.
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailFailure {
    ConnectionRefused,
    AuthenticationFailed,
    Timeout,
    Other,
}

impl fmt::Display for MailFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MailFailure::ConnectionRefused => {
                "Could not connect to the email server. Please try again later."
            }
            MailFailure::AuthenticationFailed => {
                "Email server authentication failed. Please contact the site administrator."
            }
            MailFailure::Timeout => "The email server took too long to respond. Please try again.",
            MailFailure::Other => "Failed to send your message. Please try again later.",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind:?}: {source}")]
pub struct MailError {
    pub kind: MailFailure,
    #[source]
    source: BoxError,
}

impl MailError {
    pub fn new(kind: MailFailure, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        let kind = classify(&e);
        MailError::new(kind, e)
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(e: lettre::error::Error) -> Self {
        MailError::new(MailFailure::Other, e)
    }
}

/// SMTP reply codes that mean the server refused our credentials.
const AUTH_CODES: &[&str] = &["454", "530", "534", "535"];

fn classify(e: &lettre::transport::smtp::Error) -> MailFailure {
    if e.is_timeout() {
        return MailFailure::Timeout;
    }
    if let Some(code) = e.status() {
        if is_auth_code(&code.to_string()) {
            return MailFailure::AuthenticationFailed;
        }
    }
    match io_kind_in_chain(e) {
        Some(io::ErrorKind::ConnectionRefused) => MailFailure::ConnectionRefused,
        Some(io::ErrorKind::TimedOut) => MailFailure::Timeout,
        _ => MailFailure::Other,
    }
}

fn is_auth_code(code: &str) -> bool {
    AUTH_CODES.contains(&code)
}

/// First `io::Error` kind found walking the source chain (including `err` itself).
fn io_kind_in_chain(err: &(dyn StdError + 'static)) -> Option<io::ErrorKind> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        current = e.source();
    }
    None
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(cfg: &SmtpConfig) -> Result<Self, ConfigError> {
        let from: Mailbox = cfg.from.parse().map_err(|_| ConfigError::Address {
            key: "CONTACT_FROM",
            value: cfg.from.clone(),
        })?;
        let to: Mailbox = cfg.to.parse().map_err(|_| ConfigError::Address {
            key: "CONTACT_TO",
            value: cfg.to.clone(),
        })?;
        let builder = match cfg.tls {
            SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)
                .map_err(|e| ConfigError::Smtp(e.to_string()))?,
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.host)
                .map_err(|e| ConfigError::Smtp(e.to_string()))?,
            SmtpSecurity::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&cfg.host),
        };
        let mut builder = builder.port(cfg.port).timeout(Some(cfg.timeout()));
        if let Some((user, pass)) = cfg.credentials() {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }
        tracing::info!(host = %cfg.host, port = cfg.port, tls = ?cfg.tls, "smtp transport configured");
        Ok(Self {
            transport: builder.build(),
            from,
            to,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(mail.subject);
        if let Some(reply_to) = mail.reply_to.as_deref().and_then(|s| s.parse::<Mailbox>().ok()) {
            builder = builder.reply_to(reply_to);
        }
        let message = builder.header(ContentType::TEXT_PLAIN).body(mail.body)?;
        self.transport.send(message).await?;
        Ok(())
    }
}
