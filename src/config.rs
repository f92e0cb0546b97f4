use thiserror::Error;

pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

/// Credentials for the transactional email relay behind the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            endpoint: get("EMAIL_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),
            service_id: get("EMAIL_RELAY_SERVICE_ID")?,
            template_id: get("EMAIL_RELAY_TEMPLATE_ID")?,
            public_key: get("EMAIL_RELAY_PUBLIC_KEY")?,
            private_key: get("EMAIL_RELAY_PRIVATE_KEY").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_required_and_defaults() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("EMAIL_RELAY_SERVICE_ID", "svc"),
            ("EMAIL_RELAY_TEMPLATE_ID", "tpl"),
            ("EMAIL_RELAY_PUBLIC_KEY", "pub"),
        ]))
        .expect("config should load");
        assert_eq!(config.endpoint, DEFAULT_RELAY_URL);
        assert_eq!(config.service_id, "svc");
        assert_eq!(config.private_key, None);
    }

    #[test]
    fn test_missing_variable() {
        let err = RelayConfig::from_lookup(lookup(&[
            ("EMAIL_RELAY_SERVICE_ID", "svc"),
            ("EMAIL_RELAY_TEMPLATE_ID", " "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAIL_RELAY_TEMPLATE_ID"));
        assert_eq!(err.to_string(), "missing environment variable EMAIL_RELAY_TEMPLATE_ID");
    }

    #[test]
    fn test_overrides() {
        let config = RelayConfig::from_lookup(lookup(&[
            ("EMAIL_RELAY_URL", "http://localhost:9000/send"),
            ("EMAIL_RELAY_SERVICE_ID", "svc"),
            ("EMAIL_RELAY_TEMPLATE_ID", "tpl"),
            ("EMAIL_RELAY_PUBLIC_KEY", "pub"),
            ("EMAIL_RELAY_PRIVATE_KEY", "priv"),
        ]))
        .expect("config should load");
        assert_eq!(config.endpoint, "http://localhost:9000/send");
        assert_eq!(config.private_key.as_deref(), Some("priv"));
    }
}
