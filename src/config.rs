/*---------- Imports ----------*/
use std::env;

/*---------- Constants ----------*/
pub const GREETING_VAR: &str = "MY_ENV_VAR";
pub const UNSET_MARKER: &str = "undefined";

/// Values read from the process environment once, at startup, and handed to
/// every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    pub greeting_var: Option<String>,
}

impl HandlerConfig {
    pub fn new(greeting_var: Option<String>) -> Self {
        Self { greeting_var }
    }

    /// Non-unicode values are kept, with invalid bytes replaced by U+FFFD.
    pub fn from_env() -> Self {
        Self::new(env::var_os(GREETING_VAR).map(|value| value.to_string_lossy().into_owned()))
    }

    /// The configured value, or `undefined` when the variable was missing.
    pub fn greeting_value(&self) -> &str {
        self.greeting_var.as_deref().unwrap_or(UNSET_MARKER)
    }
}
