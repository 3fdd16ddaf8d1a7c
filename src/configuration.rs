use crate::domain::{KeyStyle, ReferralSchema};
use crate::referral_client::ReferralClient;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub referral_client: ReferralClientSettings,
    #[serde(default)]
    pub schema: ReferralSchema,
}

#[derive(Debug, Deserialize)]
pub struct ReferralClientSettings {
    pub endpoint: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    #[serde(default)]
    pub key_style: KeyStyle,
}

impl ReferralClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<ReferralClient, reqwest::Error> {
        ReferralClient::new(self.endpoint.clone(), self.key_style, self.timeout())
    }
}

/// Reads `configuration/base.yaml`, the `APP_ENV` overlay and `APP_*` variables.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to determine current directory: {e}")))?;
    let config_dir = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        // try to convert the "local" String into an Environment::Local enum
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_file = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(environment_file)))
        // e.g. APP_REFERRAL_CLIENT__ENDPOINT=https://... overrides referral_client.endpoint
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
