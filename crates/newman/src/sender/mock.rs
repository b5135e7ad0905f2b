//! In-memory transport for tests and local development.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use super::{EmailSender, SendContext};
use crate::error::Result;
use crate::message::EmailMessage;
use crate::mime::build_mime_message;
use crate::validation::validate_message;

/// Mock transport configuration.
///
/// ```
/// use newman::MockConfig;
///
/// let config: MockConfig = serde_json::from_str(r#"{"storage": "/tmp/mail"}"#).unwrap();
/// assert!(config.storage.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Directory receiving a `.mim` dump of every sent message.
    pub storage: Option<PathBuf>,
}

impl MockConfig {
    /// Sets the dump directory.
    #[must_use]
    pub fn with_storage(mut self, storage: impl Into<PathBuf>) -> Self {
        self.storage = Some(storage.into());
        self
    }
}

/// Transport that records messages instead of delivering them.
///
/// Clones share the same log. When a storage directory is configured, each
/// message is also written as MIME to
/// `<storage>/<first recipient>/<timestamp>-<hash>.mim`.
#[derive(Debug, Clone, Default)]
pub struct MockSender {
    config: MockConfig,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MockSender {
    /// Creates a mock transport.
    #[must_use]
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            sent: Arc::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Plain text bodies of every sent message, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.log()
            .iter()
            .map(|m| m.text.clone().into_bytes())
            .collect()
    }

    /// Every sent message, oldest first.
    #[must_use]
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.log().to_vec()
    }

    /// Clears the log.
    pub fn reset(&self) {
        self.log().clear();
    }

    fn log(&self) -> MutexGuard<'_, Vec<EmailMessage>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn deliver(&self, ctx: &SendContext, message: &EmailMessage) -> Result<()> {
        validate_message(message)?;
        ctx.check()?;

        let to = message.to();
        info!(
            to = %to.join(","),
            recipients = to.len(),
            subject = %message.subject,
            "Sending test email"
        );

        self.log().push(message.clone());

        if let Some(storage) = &self.config.storage {
            let path = save_to_file(storage, message).await?;
            debug!(path = %path.display(), "Stored test email");
        }

        Ok(())
    }
}

#[async_trait]
impl EmailSender for MockSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<()> {
        self.deliver(&SendContext::background(), message).await
    }

    async fn send_email_with_context(
        &self,
        ctx: &SendContext,
        message: &EmailMessage,
    ) -> Result<()> {
        ctx.run(self.deliver(ctx, message)).await
    }
}

async fn save_to_file(storage: &Path, message: &EmailMessage) -> Result<PathBuf> {
    // Validation guarantees at least one recipient.
    let first_to = message.to().into_iter().next().unwrap_or_default();
    let dir = storage.join(first_to);
    tokio::fs::create_dir_all(&dir).await?;

    let mime = build_mime_message(message);
    let path = dir.join(unique_filename(&mime));
    tokio::fs::write(&path, &mime).await?;

    Ok(path)
}

fn unique_filename(mime: &[u8]) -> String {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let digest = Sha256::digest(mime);
    let hash: String = digest[..8].iter().map(|b| format!("{b:02x}")).collect();
    format!("{timestamp}-{hash}.mim")
}
