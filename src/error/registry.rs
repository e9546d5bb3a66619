use thiserror::Error;

use crate::registry::HandlerKind;

/// Errors raised while building the handler registry at startup.
///
/// All variants are fatal: a registry that fails to build aborts startup before
/// the gateway client is created.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A handler was registered with an empty name and can never be looked up.
    #[error("{kind} handler registered without a name")]
    MissingName {
        /// Table the handler was registered into
        kind: HandlerKind,
    },

    /// An event listener subscribed to an event the gateway adapter never emits.
    #[error("Event listener subscribed to unknown gateway event '{0}'")]
    UnknownEvent(String),
}
