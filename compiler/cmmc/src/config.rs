//! Driver settings.

/// Environment variable that turns off printing the program's final value.
pub const PRINT_RESULT_VAR: &str = "CMM_PRINT_RESULT";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Write the rendered final value after the program's own output.
    pub print_result: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { print_result: true }
    }
}

impl Config {
    /// Defaults overridden by the environment.
    ///
    /// `CMM_PRINT_RESULT=0` (or `false`) disables the final value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(value) = lookup(PRINT_RESULT_VAR) {
            config.print_result = !matches!(value.trim(), "0" | "false" | "no" | "off");
        }
        config
    }
}
