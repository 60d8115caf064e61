//! Form configuration
//!
//! Copy the form hands to the UI layer: placeholders and the success
//! notification. Rule messages are fixed and not part of the config.

pub const ENV_NEW_PLACEHOLDER: &str = "PWD_FORM_NEW_PLACEHOLDER";
pub const ENV_CONFIRM_PLACEHOLDER: &str = "PWD_FORM_CONFIRM_PLACEHOLDER";
pub const ENV_SUCCESS_TITLE: &str = "PWD_FORM_SUCCESS_TITLE";
pub const ENV_SUCCESS_MESSAGE: &str = "PWD_FORM_SUCCESS_MESSAGE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub new_password_placeholder: String,
    pub confirm_password_placeholder: String,
    pub success_title: String,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            new_password_placeholder: "New password".to_string(),
            confirm_password_placeholder: "Re-enter new password".to_string(),
            success_title: "Success".to_string(),
            success_message: "You have successfully changed your password.".to_string(),
        }
    }
}

impl FormConfig {
    /// Builds the config from the environment.
    ///
    /// Priority for each value:
    /// 1. Environment variable (`PWD_FORM_*`)
    /// 2. Default from [`FormConfig::default`]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            new_password_placeholder: env_or(ENV_NEW_PLACEHOLDER, defaults.new_password_placeholder),
            confirm_password_placeholder: env_or(
                ENV_CONFIRM_PLACEHOLDER,
                defaults.confirm_password_placeholder,
            ),
            success_title: env_or(ENV_SUCCESS_TITLE, defaults.success_title),
            success_message: env_or(ENV_SUCCESS_MESSAGE, defaults.success_message),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Form config override from {}", key);
            value
        }
        _ => default,
    }
}
