//! Email message rendering and the delivery seam.
//!
//! The engine renders (subject, body) pairs for reminder, completion,
//! and daily-summary messages; actual transport belongs to whatever
//! implements [`Mailer`]. Nothing in this module opens a connection.

pub mod templates;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A fully rendered message ready for a delivery collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailMessage {
    /// Destination address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body: String,
}

impl EmailMessage {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Delivery seam. Implementations own transport (SMTP, queue, stdout
/// dry-run); the core never constructs one itself.
pub trait Mailer {
    /// Deliver a rendered message.
    fn send(&self, message: &EmailMessage) -> Result<(), CoreError>;
}
