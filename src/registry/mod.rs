//! Handler registry.
//!
//! Built once at startup from the explicit registration list in `crate::handlers`, before
//! the gateway client exists, and shared read-only afterwards. Commands and interactions
//! are indexed by name; event listeners are subscribed on the `EventBus` under the
//! gateway event they declare.

pub mod event;
pub mod handler;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serenity::all::CreateCommand;

use crate::error::registry::RegistryError;
use crate::registry::{
    event::{EventBus, SUPPORTED_EVENTS},
    handler::{EventListener, InteractionHandler},
};

/// Table a handler is registered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Command,
    Interaction,
    Event,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Command => "command",
            Self::Interaction => "interaction",
            Self::Event => "event",
        })
    }
}

/// Handler counts, logged when the gateway becomes ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrySummary {
    pub commands: usize,
    pub interactions: usize,
    pub listeners: usize,
}

pub struct Registry {
    commands: HashMap<String, Arc<dyn InteractionHandler>>,
    interactions: HashMap<String, Arc<dyn InteractionHandler>>,
    events: EventBus,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn command(&self, name: &str) -> Option<&Arc<dyn InteractionHandler>> {
        self.commands.get(name)
    }

    pub fn interaction(&self, name: &str) -> Option<&Arc<dyn InteractionHandler>> {
        self.interactions.get(name)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary {
            commands: self.commands.len(),
            interactions: self.interactions.len(),
            listeners: self.events.listener_count(),
        }
    }

    /// Application command definitions of every handler that has one, sorted by name.
    pub fn command_definitions(&self) -> Vec<CreateCommand> {
        let mut handlers = self
            .commands
            .values()
            .chain(self.interactions.values())
            .filter_map(|handler| Some((handler.name(), handler.definition()?)))
            .collect::<Vec<_>>();

        handlers.sort_by(|(a, _), (b, _)| a.cmp(b));
        handlers.into_iter().map(|(_, definition)| definition).collect()
    }
}

/// Collects handlers and validates them into a `Registry`.
#[derive(Default)]
pub struct RegistryBuilder {
    commands: Vec<Arc<dyn InteractionHandler>>,
    interactions: Vec<Arc<dyn InteractionHandler>>,
    listeners: Vec<Arc<dyn EventListener>>,
}

impl RegistryBuilder {
    pub fn command(mut self, handler: impl InteractionHandler + 'static) -> Self {
        self.commands.push(Arc::new(handler));
        self
    }

    pub fn interaction(mut self, handler: impl InteractionHandler + 'static) -> Self {
        self.interactions.push(Arc::new(handler));
        self
    }

    pub fn event(mut self, listener: impl EventListener + 'static) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    /// Validates and indexes the registered handlers.
    ///
    /// A name registered twice in the same table keeps the last registration and logs a
    /// warning.
    ///
    /// # Returns
    /// - `Ok(Registry)` - Every handler has a name and every listener a known event
    /// - `Err(RegistryError::MissingName)` - A handler or listener has an empty name
    /// - `Err(RegistryError::UnknownEvent)` - A listener names an event that is never emitted
    pub fn build(self) -> Result<Registry, RegistryError> {
        let commands = index(HandlerKind::Command, self.commands)?;
        let interactions = index(HandlerKind::Interaction, self.interactions)?;

        let mut events = EventBus::default();
        for listener in self.listeners {
            let name = listener.event();
            if name.is_empty() {
                return Err(RegistryError::MissingName {
                    kind: HandlerKind::Event,
                });
            }
            if !SUPPORTED_EVENTS.contains(&name) {
                return Err(RegistryError::UnknownEvent(name.to_string()));
            }
            events.subscribe(listener);
        }

        Ok(Registry {
            commands,
            interactions,
            events,
        })
    }
}

fn index(
    kind: HandlerKind,
    handlers: Vec<Arc<dyn InteractionHandler>>,
) -> Result<HashMap<String, Arc<dyn InteractionHandler>>, RegistryError> {
    let mut table = HashMap::with_capacity(handlers.len());

    for handler in handlers {
        let name = handler.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::MissingName { kind });
        }
        if table.insert(name.clone(), handler).is_some() {
            tracing::warn!(
                "Duplicate {} handler '{}' registered, keeping the last one",
                kind,
                name
            );
        }
    }

    Ok(table)
}
