use std::{fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display prefix server function errors carry; not meant for visitors.
const SERVER_ERROR_PREFIX: &str = "error running server function: ";

/// How long a sent/failed banner stays up before it clears itself.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(3);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(Field),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Checks fields in form order and reports the first problem found.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Template variables, keyed the same as the form fields so a relay
/// template can use `{{name}}`, `{{email}}`, `{{subject}}` and `{{message}}`.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// JSON body accepted by EmailJS-compatible relays.
#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(
        service_id: &str,
        template_id: &str,
        user_id: &str,
        access_token: Option<&str>,
        form: &ContactForm,
    ) -> Self {
        Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            user_id: user_id.to_string(),
            access_token: access_token.map(str::to_string),
            template_params: TemplateParams {
                name: form.name.clone(),
                email: form.email.clone(),
                subject: form.subject.clone(),
                message: form.message.clone(),
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl FormStatus {
    /// Failed status for a server error message, minus the server function
    /// framing.
    pub fn failed(reason: &str) -> Self {
        let reason = reason.strip_prefix(SERVER_ERROR_PREFIX).unwrap_or(reason);
        Self::Failed(reason.trim().to_string())
    }

    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending your message...".to_string()),
            Self::Sent => Some("Thanks! Your message has been sent.".to_string()),
            Self::Failed(reason) => Some(format!("Message not sent: {reason}")),
        }
    }

    /// Sent and failed banners clear themselves after [`BANNER_TIMEOUT`].
    pub fn auto_dismiss(&self) -> bool {
        matches!(self, Self::Sent | Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Loved the site.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let empty = ContactForm::default();
        assert_eq!(empty.validate(), Err(ContactError::MissingField(Field::Name)));

        let mut f = form();
        f.subject = "   ".to_string();
        f.message = String::new();
        assert_eq!(f.validate(), Err(ContactError::MissingField(Field::Subject)));
        assert_eq!(
            ContactError::MissingField(Field::Subject).to_string(),
            "Please fill in your subject."
        );
    }

    #[test]
    fn test_email_pattern() {
        for bad in ["sam", "sam@", "@example.com", "sam@example", "sam @example.com", "a@b@c.com"] {
            let mut f = form();
            f.email = bad.to_string();
            assert_eq!(f.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        for good in ["a@b.co", " sam.lee+site@mail.example.org ", "x@y.z"] {
            let mut f = form();
            f.email = good.to_string();
            assert_eq!(f.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn test_trimmed() {
        let mut f = form();
        f.name = "  Sam \n".to_string();
        assert_eq!(f.trimmed().name, "Sam");
    }

    #[test]
    fn test_relay_request_body() {
        let req = RelayRequest::new("svc", "tpl", "pub", None, &form());
        let body = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["user_id"], "pub");
        assert_eq!(body["template_params"]["email"], "sam@example.com");
        assert!(body.get("accessToken").is_none());

        let req = RelayRequest::new("svc", "tpl", "pub", Some("secret"), &form());
        let body = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(body["accessToken"], "secret");
    }

    #[test]
    fn test_status_banner() {
        assert_eq!(FormStatus::Idle.banner(), None);
        assert!(!FormStatus::Sending.auto_dismiss());
        assert!(FormStatus::Sent.auto_dismiss());
        let failed = FormStatus::Failed("relay down".to_string());
        assert!(failed.auto_dismiss());
        assert_eq!(failed.banner().as_deref(), Some("Message not sent: relay down"));
    }

    #[test]
    fn test_template_params_keep_form_field_names() {
        let req = RelayRequest::new("svc", "tpl", "pub", None, &form());
        let body = serde_json::to_value(&req).expect("should serialize");
        let params = body["template_params"].as_object().expect("object");
        let mut keys = params.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, ["email", "message", "name", "subject"]);
        assert_eq!(params["name"], "Sam");
        assert_eq!(params["email"], "sam@example.com");
        assert_eq!(params["subject"], "Hello");
        assert_eq!(params["message"], "Loved the site.");
    }

    #[test]
    fn test_banner_clears_after_three_seconds() {
        assert_eq!(BANNER_TIMEOUT, Duration::from_secs(3));
    }

    #[test]
    fn test_failed_banner_hides_server_fn_framing() {
        let status = FormStatus::failed(
            "error running server function: couldn't deliver your message, please try again later",
        );
        assert_eq!(
            status.banner().as_deref(),
            Some("Message not sent: couldn't deliver your message, please try again later")
        );
        assert_eq!(
            FormStatus::failed("network unreachable"),
            FormStatus::Failed("network unreachable".to_string())
        );
    }
}
