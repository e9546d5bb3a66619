//! Analytics domain models and parameters.
//!
//! Every matched interaction is recorded as an analytics event before its handler
//! runs. The category names match the ones used by the bot's analytics dashboards,
//! so they are part of the stored format.

use chrono::{DateTime, Utc};

use crate::model::interaction::InteractionEvent;

/// Category an analytics event is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsCategory {
    Button,
    ContextMenu,
    SelectMenu,
    Command,
}

impl AnalyticsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::ContextMenu => "contextMenu",
            Self::SelectMenu => "selectMenu",
            Self::Command => "command",
        }
    }
}

/// Parameters for storing one analytics event.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAnalyticsEventParam {
    pub category: AnalyticsCategory,
    /// Custom id of the component or name of the command
    pub identifier: String,
    pub interaction_id: u64,
    pub user_id: u64,
    pub guild_id: Option<u64>,
    /// Serialized interaction
    pub payload: String,
}

impl RecordAnalyticsEventParam {
    /// Builds the parameters for an interaction, serializing it as the payload.
    ///
    /// # Arguments
    /// - `category` - Category to file the event under
    /// - `identifier` - Custom id or command name
    /// - `event` - The interaction being recorded
    ///
    /// # Returns
    /// - `Ok(RecordAnalyticsEventParam)` - Parameters ready for the repository
    /// - `Err(serde_json::Error)` - The interaction could not be serialized
    pub fn from_interaction(
        category: AnalyticsCategory,
        identifier: &str,
        event: &InteractionEvent,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            category,
            identifier: identifier.to_string(),
            interaction_id: event.id,
            user_id: event.user.id,
            guild_id: event.guild.as_ref().map(|guild| guild.id),
            payload: serde_json::to_string(event)?,
        })
    }
}

/// A stored analytics event.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub id: i32,
    pub category: String,
    pub identifier: String,
    pub interaction_id: String,
    pub user_id: String,
    pub guild_id: Option<String>,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::analytics_event::Model) -> Self {
        Self {
            id: entity.id,
            category: entity.category,
            identifier: entity.identifier,
            interaction_id: entity.interaction_id,
            user_id: entity.user_id,
            guild_id: entity.guild_id,
            payload: entity.payload,
            created_at: entity.created_at,
        }
    }
}
