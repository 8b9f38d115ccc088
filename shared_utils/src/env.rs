use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable, mapping unset or empty values to `None`.
///
/// Useful for optional settings where an empty string is as good as absent
/// (e.g. a config file path override).
pub fn optional_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_yields_structured_error() {
        let err = get_env_var("GROWTH_TRACKER_TEST_DOES_NOT_EXIST").unwrap_err();
        assert!(err.to_string().contains("GROWTH_TRACKER_TEST_DOES_NOT_EXIST"));
    }

    #[test]
    fn optional_var_treats_unset_as_none() {
        assert_eq!(optional_env_var("GROWTH_TRACKER_TEST_DOES_NOT_EXIST"), None);
    }
}
