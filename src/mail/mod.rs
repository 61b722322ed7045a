//! Contact form handling
//!
//! Submissions are validated locally, then handed to an HTTP email API with
//! a templated body. Failures come back as user-facing errors; there are no
//! retries and no delivery tracking.

use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::config::MailConfig;
use crate::content::Violation;
use crate::error::{Error, Result};

lazy_static::lazy_static! {
    static ref EMAIL_RE: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// A message submitted through the contact form
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate the form fields, collecting every violation
    pub fn validate(&self) -> std::result::Result<(), Vec<Violation>> {
        let mut out = Vec::new();
        if self.name.trim().chars().count() < 2 {
            out.push(violation("name", "Name must be at least 2 characters."));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            out.push(violation("email", "Please enter a valid email address."));
        }
        if self.subject.trim().chars().count() < 5 {
            out.push(violation("subject", "Subject must be at least 5 characters."));
        }
        if self.message.trim().chars().count() < 10 {
            out.push(violation("message", "Message must be at least 10 characters."));
        }
        if out.is_empty() {
            Ok(())
        } else {
            Err(out)
        }
    }
}

// reuse the content violation shape so API responses stay uniform
fn violation(path: &str, message: &str) -> Violation {
    Violation {
        path: path.to_string(),
        message: message.to_string(),
    }
}

/// Render the templated notification body
pub fn render_body(msg: &ContactMessage) -> String {
    format!(
        "New message from your website contact form\n\
         \n\
         You have received a new message from {} ({}).\n\
         \n\
         Subject: {}\n\
         \n\
         Message:\n\
         {}\n\
         \n\
         This email was sent from the contact form on your artist website.\n",
        msg.name, msg.email, msg.subject, msg.message
    )
}

/// Send a validated contact message through the configured email API
pub async fn send_contact_email(
    http: &reqwest::Client,
    config: &MailConfig,
    msg: &ContactMessage,
) -> Result<()> {
    if config.api_key.is_empty() || config.to.is_empty() {
        return Err(Error::NotConfigured(
            "Email sending is not configured on the server.".to_string(),
        ));
    }

    let payload = json!({
        "from": config.from,
        "to": [config.to],
        "reply_to": msg.email,
        "subject": format!("Website contact: {}", msg.subject),
        "text": render_body(msg),
    });

    let response = http
        .post(&config.api_url)
        .bearer_auth(&config.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| Error::Upstream(format!("email request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        warn!("Email API returned {}", status);
        return Err(Error::Upstream(format!(
            "email service rejected the message ({status})"
        )));
    }

    info!("Contact message from {} forwarded", msg.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Booking inquiry".to_string(),
            message: "Hello, are you available in June?".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn test_every_rule_is_enforced() {
        let bad = ContactMessage {
            name: "A".to_string(),
            email: "nope".to_string(),
            subject: "Hi".to_string(),
            message: "short".to_string(),
        };
        let violations = bad.validate().unwrap_err();
        let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_body_contains_sender_and_message() {
        let body = render_body(&message());
        assert!(body.contains("Ada"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("are you available in June?"));
    }

    #[tokio::test]
    async fn test_unconfigured_mail_is_reported() {
        let config = MailConfig::default();
        let err = send_contact_email(&reqwest::Client::new(), &config, &message())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotConfigured(_)));
    }
}
