use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fmt;
use tracing::{debug, info};

use crate::config::Config;

/// Email delivery errors; always recovered by callers
#[derive(Debug)]
pub enum MailError {
    Address(lettre::address::AddressError),
    Build(lettre::error::Error),
    Transport(lettre::transport::smtp::Error),
    Task(tokio::task::JoinError),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Address(e) => write!(f, "Invalid email address: {}", e),
            MailError::Build(e) => write!(f, "Failed to build message: {}", e),
            MailError::Transport(e) => write!(f, "SMTP delivery failed: {}", e),
            MailError::Task(e) => write!(f, "Mail task failed: {}", e),
        }
    }
}

impl std::error::Error for MailError {}

/// SMTP mailer for transactional email
///
/// Only constructed when the SMTP settings are fully configured; without
/// them the application runs with email delivery disabled.
#[derive(Clone)]
pub struct Mailer {
    smtp_server: String,
    smtp_user: String,
    smtp_pass: String,
    from_email: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Option<Self> {
        match (
            &config.smtp_server,
            &config.smtp_user,
            &config.smtp_pass,
            &config.from_email,
        ) {
            (Some(server), Some(user), Some(pass), Some(from)) => {
                info!("Mailer configured for SMTP relay {}", server);
                Some(Self {
                    smtp_server: server.clone(),
                    smtp_user: user.clone(),
                    smtp_pass: pass.clone(),
                    from_email: from.clone(),
                })
            }
            _ => {
                info!("SMTP settings incomplete, email delivery disabled");
                None
            }
        }
    }

    /// Send an HTML email. SMTP transport is blocking, so the send runs on
    /// the blocking pool and is awaited inline.
    pub async fn send_html(
        &self,
        to: &str,
        subject: &str,
        html: String,
    ) -> Result<(), MailError> {
        let mailer = self.clone();
        let to = to.to_string();
        let subject = subject.to_string();

        debug!("Sending email to {}", to);

        tokio::task::spawn_blocking(move || {
            let message = Message::builder()
                .from(mailer.from_email.parse().map_err(MailError::Address)?)
                .to(to.parse().map_err(MailError::Address)?)
                .subject(subject)
                .header(ContentType::TEXT_HTML)
                .body(html)
                .map_err(MailError::Build)?;

            let credentials =
                Credentials::new(mailer.smtp_user.clone(), mailer.smtp_pass.clone());

            let transport = SmtpTransport::relay(&mailer.smtp_server)
                .map_err(MailError::Transport)?
                .credentials(credentials)
                .build();

            transport
                .send(&message)
                .map(|_| ())
                .map_err(MailError::Transport)
        })
        .await
        .map_err(MailError::Task)?
    }

    /// Confirmation sent to an applicant after a successful submission
    pub async fn send_application_receipt(
        &self,
        to: &str,
        applicant_name: &str,
        job_title: &str,
    ) -> Result<(), MailError> {
        let subject = format!("Application Submitted for {}", job_title);
        let html = format!(
            "<p>Dear {applicant_name},</p>\
             <p>Thank you for applying to the {job_title} position. We have received your \
             application and will review it shortly.</p>\
             <p>Best regards,<br>The Hireboard Team</p>"
        );
        self.send_html(to, &subject, html).await
    }
}
