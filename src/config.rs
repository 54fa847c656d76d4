use std::time::Duration;

use crate::{
    cli_arguments::CliArguments,
    http_client::reqwest_http_client::ReqwestHttpClient,
    json_codec::{field_naming::FieldNaming, json_codec::JsonCodec},
};

pub const DEFAULT_BASE_URL: &str = "https://api.vimeo.com";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub field_naming: FieldNaming,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("vimeo-net/{}", env!("CARGO_PKG_VERSION")),
            field_naming: FieldNaming::default(),
        }
    }
}

impl ClientConfig {
    pub fn build_http_client(&self) -> Result<ReqwestHttpClient, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?;
        Ok(ReqwestHttpClient::new(client))
    }

    pub fn codec(&self) -> JsonCodec {
        JsonCodec::builder()
            .field_naming(self.field_naming)
            .build()
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl From<&CliArguments> for ClientConfig {
    fn from(args: &CliArguments) -> Self {
        Self {
            base_url: args.base_url.clone(),
            timeout: Duration::from_secs(args.timeout_secs),
            field_naming: args.naming.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use crate::{
        cli_arguments::CliArguments,
        config::{ClientConfig, DEFAULT_BASE_URL},
        json_codec::field_naming::FieldNaming,
    };

    #[test]
    fn defaults_target_the_public_api() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("vimeo-net/"));
        assert_eq!(config.codec().field_naming(), FieldNaming::LowerCaseWithUnderscores);
    }

    #[test]
    fn joins_paths_onto_the_base_url() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..ClientConfig::default()
        };

        assert_eq!(config.url_for("/me/videos"), "http://localhost:8080/me/videos");
        assert_eq!(config.url_for("me"), "http://localhost:8080/me");
    }

    #[test]
    fn reads_settings_from_cli_arguments() {
        let args = CliArguments::parse_from([
            "vimeo-net",
            "--base-url",
            "http://localhost:9000",
            "--timeout-secs",
            "5",
            "--naming",
            "identity",
            "query",
            "http://x?a=1",
        ]);

        let config = ClientConfig::from(&args);

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.field_naming, FieldNaming::Identity);
    }

    #[test]
    fn builds_an_http_client() {
        assert!(ClientConfig::default().build_http_client().is_ok());
    }
}
