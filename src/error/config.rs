use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds a value the bot cannot use.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The rejected value
        value: String,
    },
}
