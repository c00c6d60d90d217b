use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} was not set when the site was built")]
    Missing(&'static str),
}

/// Identifiers selecting the EmailJS account and template that contact
/// messages are delivered through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Reads the relay identifiers captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_values(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let require = |value: Option<&str>, name: &'static str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(ConfigError::Missing(name))
        };
        Ok(Self {
            service_id: require(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: require(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: require(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}
