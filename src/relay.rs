use http::StatusCode;
use thiserror::Error;

use crate::config::RelayConfig;
use crate::contact::{ContactForm, RelayRequest};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay rejected message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Forwards contact form submissions to the email relay.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn request_for(&self, form: &ContactForm) -> RelayRequest {
        RelayRequest::new(
            &self.config.service_id,
            &self.config.template_id,
            &self.config.public_key,
            self.config.private_key.as_deref(),
            form,
        )
    }

    pub async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let body = self.request_for(form);
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(RelayError::Rejected { status, body });
        }
        tracing::info!(subject = %form.subject, "contact message relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_config() {
        let relay = EmailRelay::new(RelayConfig {
            endpoint: "http://localhost/send".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pub".to_string(),
            private_key: Some("priv".to_string()),
        });
        let form = ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        let req = relay.request_for(&form);
        assert_eq!(req.template_id, "tpl");
        assert_eq!(req.access_token.as_deref(), Some("priv"));
        assert_eq!(req.template_params.name, "Sam");
    }
}
