use crate::error::{config::ConfigError, AppError};
use crate::model::{diagnostic::DiagnosticQuery, locale::Locale};

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Language used for replies the bot sends on its own behalf.
    pub locale: Locale,

    /// Sanity-check query issued once the gateway is ready, if configured.
    pub diagnostic_query: Option<DiagnosticQuery>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead so they
    /// never touch the process environment.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables were present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let locale = match lookup("BOT_LOCALE") {
            Some(value) => Locale::parse(&value).ok_or(ConfigError::InvalidValue {
                name: "BOT_LOCALE".to_string(),
                value,
            })?,
            None => Locale::default(),
        };

        let diagnostic_query = match lookup("DIAGNOSTIC_TABLE") {
            Some(table) => Some(DiagnosticQuery {
                table,
                json_column: require("DIAGNOSTIC_JSON_COLUMN")?,
                json_field: require("DIAGNOSTIC_JSON_FIELD")?,
                value: require("DIAGNOSTIC_JSON_VALUE")?,
            }),
            None => None,
        };

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            database_url: require("DATABASE_URL")?,
            locale,
            diagnostic_query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    /// Tests loading a minimal configuration.
    ///
    /// Expected: Ok with default locale and no diagnostic query
    #[test]
    fn loads_required_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "postgres://localhost/bot"),
        ]))
        .unwrap();

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.database_url, "postgres://localhost/bot");
        assert_eq!(config.locale, Locale::En);
        assert!(config.diagnostic_query.is_none());
    }

    /// Tests that a missing token names the token variable.
    ///
    /// Expected: Err(MissingEnvVar("DISCORD_BOT_TOKEN"))
    #[test]
    fn missing_token_is_reported_by_name() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db")]));

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "DISCORD_BOT_TOKEN")
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    /// Tests that a diagnostic table without its column settings is rejected.
    ///
    /// Expected: Err(MissingEnvVar("DIAGNOSTIC_JSON_COLUMN"))
    #[test]
    fn partial_diagnostic_query_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "postgres://db"),
            ("DIAGNOSTIC_TABLE", "events"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name)))
                if name == "DIAGNOSTIC_JSON_COLUMN"
        ));
    }

    /// Tests loading the full configuration including locale and diagnostic query.
    #[test]
    fn loads_locale_and_diagnostic_query() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "postgres://db"),
            ("BOT_LOCALE", "fi"),
            ("DIAGNOSTIC_TABLE", "events"),
            ("DIAGNOSTIC_JSON_COLUMN", "payload"),
            ("DIAGNOSTIC_JSON_FIELD", "kind"),
            ("DIAGNOSTIC_JSON_VALUE", "meal"),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::Fi);
        let query = config.diagnostic_query.unwrap();
        assert_eq!(query.table, "events");
        assert_eq!(query.json_column, "payload");
        assert_eq!(query.json_field, "kind");
        assert_eq!(query.value, "meal");
    }

    /// Tests that an unsupported locale is rejected rather than silently defaulted.
    #[test]
    fn rejects_unknown_locale() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DATABASE_URL", "postgres://db"),
            ("BOT_LOCALE", "xx"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));
    }
}
