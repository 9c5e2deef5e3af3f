use crate::types::LeadDraft;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use lettre::{
    message::SinglePart, transport::smtp::authentication::Credentials, Message, SmtpTransport,
    Transport,
};

/// EmailJS REST endpoint used by the production relay.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}

/// Log-safe description of a lead: no names, no phone number.
pub(crate) fn lead_label(lead: &LeadDraft) -> String {
    format!(
        "{} size={} (email_len={})",
        email_domain(&lead.email),
        lead.company_size.code(),
        lead.email.len()
    )
}

/// Trait for the services that forward demo requests to the sales inbox.
#[async_trait]
pub trait LeadRelay: Send + Sync {
    fn name(&self) -> &'static str;

    async fn forward(&self, lead: &LeadDraft) -> Result<()>;
}

/// EmailJS relay (production): one POST per lead, acknowledged by a 2xx.
pub struct EmailJsRelay {
    service_id: String,
    template_id: String,
    public_key: String,
    private_key: Option<String>,
    endpoint: String,
    client: reqwest::Client,
}

impl EmailJsRelay {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: Option<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            private_key,
            endpoint: EMAILJS_SEND_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn payload(&self, lead: &LeadDraft) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = lead
            .template_params()
            .into_iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v)))
            .collect();

        let mut body = serde_json::json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": params,
        });
        if let Some(key) = &self.private_key {
            body["accessToken"] = serde_json::Value::String(key.clone());
        }
        body
    }
}

#[async_trait]
impl LeadRelay for EmailJsRelay {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    async fn forward(&self, lead: &LeadDraft) -> Result<()> {
        debug!("relay.emailjs.forward: lead={}", lead_label(lead));
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.payload(lead))
            .send()
            .await
            .context("emailjs request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("emailjs rejected lead: status={} body={}", status, text.trim());
        }
        Ok(())
    }
}

/// SMTP relay (self-hosted): mails the lead to the sales inbox.
pub struct SmtpRelay {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
}

impl SmtpRelay {
    fn message(&self, lead: &LeadDraft) -> Result<Message> {
        let mut builder = Message::builder()
            .from(format!("{} <{}>", self.from_name, self.from_email).parse()?)
            .to(self.to_email.parse()?)
            .subject(lead_subject(lead));
        if let Ok(reply_to) = lead.email.trim().parse() {
            builder = builder.reply_to(reply_to);
        }
        Ok(builder.singlepart(SinglePart::plain(lead_text(lead)))?)
    }
}

#[async_trait]
impl LeadRelay for SmtpRelay {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn forward(&self, lead: &LeadDraft) -> Result<()> {
        debug!(
            "relay.smtp.forward: host={} lead={}",
            self.host,
            lead_label(lead)
        );
        let email = self.message(lead)?;

        let creds = Credentials::new(self.username.clone(), self.password.clone());
        let mailer = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(creds)
            .build();

        // Wrap blocking SMTP operation in spawn_blocking
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))??;

        Ok(())
    }
}

/// Console relay (local development): prints the lead instead of sending it.
pub struct ConsoleRelay;

#[async_trait]
impl LeadRelay for ConsoleRelay {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn forward(&self, lead: &LeadDraft) -> Result<()> {
        info!("relay.console.forward: lead={}", lead_label(lead));
        println!("\n📧 DEMO REQUEST (Local Mode - Not Sent)");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Subject: {}", lead_subject(lead));
        println!("────────────────────────────────");
        println!("{}", lead_text(lead));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        Ok(())
    }
}

pub(crate) fn lead_subject(lead: &LeadDraft) -> String {
    format!("Nouvelle demande de démo : {}", lead.company.trim())
}

pub(crate) fn lead_text(lead: &LeadDraft) -> String {
    let mut text = format!(
        "Société : {}\nTaille : {}\nContact : {} {}\nEmail : {}\nTéléphone : {}\nReçu le : {}\n",
        lead.company.trim(),
        lead.company_size.code(),
        lead.first_name.trim(),
        lead.last_name.trim(),
        lead.email.trim(),
        lead.phone.trim(),
        chrono::Utc::now().format("%d/%m/%Y %H:%M UTC"),
    );
    if !lead.message.trim().is_empty() {
        text.push_str("\nMessage :\n");
        text.push_str(lead.message.trim());
        text.push('\n');
    }
    text
}
