//! Environment-driven settings.

use edx2xapi_core::converter::ConverterConfig;

use crate::error::AppError;

/// UUID namespace statement ids are derived under. Required.
pub const UUID_NAMESPACE_VAR: &str = "EDX2XAPI_UUID_NAMESPACE";

/// Platform base URL used for actors and activity ids. Required.
pub const PLATFORM_URL_VAR: &str = "EDX2XAPI_PLATFORM_URL";

/// Skip events that fail to convert instead of aborting. Defaults to `false`.
pub const IGNORE_ERRORS_VAR: &str = "EDX2XAPI_IGNORE_ERRORS";

/// Treat events without a converter as failures. Defaults to `false`.
pub const FAIL_ON_UNKNOWN_VAR: &str = "EDX2XAPI_FAIL_ON_UNKNOWN";

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Converter namespace and platform URL.
    pub converter: ConverterConfig,
    /// Skip failing events instead of aborting.
    pub ignore_errors: bool,
    /// Treat unsupported events as failures.
    pub fail_on_unknown: bool,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for missing or unparsable variables and
    /// `AppError::Converter` if the namespace or platform URL is rejected.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| {
                AppError::Config(format!("{key} environment variable must be set"))
            })
        };
        let namespace = required(UUID_NAMESPACE_VAR)?;
        let platform_url = required(PLATFORM_URL_VAR)?;

        Ok(Self {
            converter: ConverterConfig::parse(&namespace, &platform_url)?,
            ignore_errors: flag(lookup(IGNORE_ERRORS_VAR), IGNORE_ERRORS_VAR)?,
            fail_on_unknown: flag(lookup(FAIL_ON_UNKNOWN_VAR), FAIL_ON_UNKNOWN_VAR)?,
        })
    }
}

fn flag(value: Option<String>, key: &str) -> Result<bool, AppError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use edx2xapi_test_support::{PLATFORM_URL, UUID_NAMESPACE};

    use super::{
        FAIL_ON_UNKNOWN_VAR, IGNORE_ERRORS_VAR, PLATFORM_URL_VAR, Settings, UUID_NAMESPACE_VAR,
    };
    use crate::error::AppError;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_from_lookup_reads_required_settings_with_default_flags() {
        // Act
        let settings = settings(&[
            (UUID_NAMESPACE_VAR, UUID_NAMESPACE),
            (PLATFORM_URL_VAR, PLATFORM_URL),
        ])
        .unwrap();

        // Assert
        assert_eq!(settings.converter.platform_url(), PLATFORM_URL);
        assert_eq!(settings.converter.uuid_namespace().to_string(), UUID_NAMESPACE);
        assert!(!settings.ignore_errors);
        assert!(!settings.fail_on_unknown);
    }

    #[test]
    fn test_from_lookup_parses_flags() {
        let settings = settings(&[
            (UUID_NAMESPACE_VAR, UUID_NAMESPACE),
            (PLATFORM_URL_VAR, PLATFORM_URL),
            (IGNORE_ERRORS_VAR, "TRUE"),
            (FAIL_ON_UNKNOWN_VAR, "1"),
        ])
        .unwrap();

        assert!(settings.ignore_errors);
        assert!(settings.fail_on_unknown);
    }

    #[test]
    fn test_from_lookup_requires_namespace() {
        let err = settings(&[(PLATFORM_URL_VAR, PLATFORM_URL)]).unwrap_err();

        assert!(matches!(err, AppError::Config(ref msg) if msg.contains(UUID_NAMESPACE_VAR)));
    }

    #[test]
    fn test_from_lookup_rejects_bad_namespace() {
        let err = settings(&[
            (UUID_NAMESPACE_VAR, "nope"),
            (PLATFORM_URL_VAR, PLATFORM_URL),
        ])
        .unwrap_err();

        assert!(matches!(err, AppError::Converter(_)));
    }

    #[test]
    fn test_from_lookup_rejects_non_boolean_flag() {
        let err = settings(&[
            (UUID_NAMESPACE_VAR, UUID_NAMESPACE),
            (PLATFORM_URL_VAR, PLATFORM_URL),
            (IGNORE_ERRORS_VAR, "sometimes"),
        ])
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
    }
}
