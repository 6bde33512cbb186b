/// Embedded configuration - values baked in by build.rs
use super::schema::ClientConfig;
use crate::error::ClientError;

/// Read the configuration injected at build time through the
/// `LICENSEGATE_*` environment variables
pub fn load_embedded_config() -> Result<ClientConfig, ClientError> {
    config_from_parts(
        option_env!("LICENSEGATE_API_URL"),
        option_env!("LICENSEGATE_APP_SECRET"),
        option_env!("LICENSEGATE_APP_NAME"),
        option_env!("LICENSEGATE_VERSION"),
    )
}

/// URL and secret are required; name and version default to empty
fn config_from_parts(
    api_url: Option<&str>,
    app_secret: Option<&str>,
    app_name: Option<&str>,
    version: Option<&str>,
) -> Result<ClientConfig, ClientError> {
    let api_url = api_url
        .filter(|v| !v.is_empty())
        .ok_or(ClientError::MissingEmbedded("LICENSEGATE_API_URL"))?;
    let app_secret = app_secret
        .filter(|v| !v.is_empty())
        .ok_or(ClientError::MissingEmbedded("LICENSEGATE_APP_SECRET"))?;

    let config = ClientConfig::new(
        api_url,
        app_secret,
        app_name.unwrap_or_default(),
        version.unwrap_or_default(),
    );
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_parts() {
        let config = config_from_parts(
            Some("https://auth.example.com/api/v1"),
            Some("secret123"),
            Some("demo"),
            None,
        )
        .unwrap();

        assert_eq!(config.app_name, "demo");
        assert_eq!(config.version, "");
    }

    #[test]
    fn test_missing_parts() {
        let err = config_from_parts(None, Some("secret"), None, None).unwrap_err();
        assert!(matches!(err, ClientError::MissingEmbedded("LICENSEGATE_API_URL")));

        let err = config_from_parts(Some("https://x"), Some(""), None, None).unwrap_err();
        assert!(matches!(err, ClientError::MissingEmbedded("LICENSEGATE_APP_SECRET")));
    }
}
