//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned from startup and from handler
//! execution. Domain-specific errors (`ConfigError`, `RegistryError`) convert into it
//! with `#[from]`, as do the errors of the external collaborators (database, Discord).

pub mod config;
pub mod registry;

use thiserror::Error;

use crate::error::{config::ConfigError, registry::RegistryError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Handler registry failed to build; startup cannot continue.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failed to serialize a payload for telemetry, analytics or event listeners.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// A matched interaction had no handler registered under its lookup key.
    ///
    /// Raised for buttons and select menus, whose handlers live under fixed keys.
    #[error("No interaction handler registered under '{0}'")]
    HandlerNotFound(String),

    /// A handler panicked while executing.
    ///
    /// # Fields
    /// - Panic payload rendered as text when it was a string
    #[error("Handler panicked: {0}")]
    HandlerPanicked(String),

    /// A handler failed with a message of its own.
    #[error("{0}")]
    Handler(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
