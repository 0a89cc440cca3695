//! Contact message submission.
//!
//! Messages are acknowledged and logged; actual email delivery is a
//! placeholder pending integration with an email service.

use chrono::Local;
use tracing::info;
use uuid::Uuid;

/// Receipt for an accepted contact message.
#[derive(Debug, Clone)]
pub struct ContactReceipt {
    pub reference_id: String,
    pub sender: String,
    pub timestamp: String,
    pub message_length: usize,
}

impl ContactReceipt {
    /// Render the receipt as user-facing confirmation text.
    pub fn render(&self) -> String {
        format!(
            "Message received and queued for delivery to Andrew Bolster.\n\n\
             Message from: {}\n\
             Timestamp: {}\n\
             Reference: {}\n\
             Length: {} characters\n\n\
             Note: This is currently a placeholder implementation. The message has \
             been logged but not yet delivered via email. Email integration will be \
             added in a future update.",
            self.sender, self.timestamp, self.reference_id, self.message_length
        )
    }
}

/// Accept a contact message: stamp it, assign a reference id, and log it.
pub fn queue_message(message: &str, sender: &str) -> ContactReceipt {
    let receipt = ContactReceipt {
        reference_id: Uuid::new_v4().to_string(),
        sender: sender.to_string(),
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        message_length: message.chars().count(),
    };

    info!(
        reference_id = %receipt.reference_id,
        sender = %receipt.sender,
        length = receipt.message_length,
        content = message,
        "Contact message queued"
    );

    receipt
}
