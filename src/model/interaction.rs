//! Interaction domain model.
//!
//! `InteractionEvent` is the read-only view of one inbound Discord interaction that the
//! dispatcher, handlers, telemetry, and analytics work with. It is converted from
//! Serenity's `Interaction` at the gateway boundary so the rest of the bot never
//! depends on the shape of the gateway payload.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};
use serenity::all::{
    Cache, ChannelId, CommandInteraction, CommandType, ComponentInteraction,
    ComponentInteractionDataKind, GuildId, Interaction, ModalInteraction, PartialChannel, User,
};

/// Placeholder stored in telemetry snapshots for interactions without command options.
pub const NO_OPTIONS: &str = "no options";

/// Classification of an interaction, checked by the dispatcher in routing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Slash (chat input) application command
    Command,
    /// Message component button
    Button,
    /// User or message context-menu command
    ContextMenu,
    /// Any select-menu component
    SelectMenu,
    /// Autocomplete, modal submits and anything newer than this bot
    Other,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Button => "button",
            Self::ContextMenu => "context_menu",
            Self::SelectMenu => "select_menu",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user who triggered an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionUser {
    pub id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Channel the interaction was triggered in. The name is only known for guild channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRef {
    pub id: u64,
    pub name: Option<String>,
}

/// Guild the interaction was triggered in. The name comes from the gateway cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuildRef {
    pub id: u64,
    pub name: Option<String>,
}

/// One inbound interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionEvent {
    pub id: u64,
    pub kind: InteractionKind,
    /// Name of the invoked command, for commands and context menus
    pub command_name: Option<String>,
    /// Developer-defined id of the component, for buttons and select menus
    pub custom_id: Option<String>,
    /// Interaction token used to respond; kept out of serialized payloads.
    #[serde(skip)]
    pub token: String,
    pub user: InteractionUser,
    pub channel: Option<ChannelRef>,
    pub guild: Option<GuildRef>,
    /// Command options as `[{ "name", "value" }]`; `None` for components
    pub options: Option<Value>,
    /// Selected values of a select menu
    pub values: Vec<String>,
    /// Targeted user or message id, for context menus
    pub target_id: Option<u64>,
}

impl InteractionEvent {
    /// Converts a gateway interaction into the domain model.
    ///
    /// Guild names are resolved from the cache and are `None` when the guild is not
    /// cached. Pings carry no user and are not converted.
    ///
    /// # Arguments
    /// - `interaction` - The interaction delivered by the gateway
    /// - `cache` - Gateway cache used to resolve the guild name
    ///
    /// # Returns
    /// - `Some(InteractionEvent)` - The converted interaction
    /// - `None` - The interaction has no invoking user (e.g. a ping)
    pub fn from_interaction(interaction: &Interaction, cache: &Cache) -> Option<Self> {
        match interaction {
            Interaction::Command(command) => Some(Self::from_command(command, cache)),
            Interaction::Autocomplete(command) => {
                let mut event = Self::from_command(command, cache);
                event.kind = InteractionKind::Other;
                Some(event)
            }
            Interaction::Component(component) => Some(Self::from_component(component, cache)),
            Interaction::Modal(modal) => Some(Self::from_modal(modal, cache)),
            _ => None,
        }
    }

    fn from_command(command: &CommandInteraction, cache: &Cache) -> Self {
        let options = command
            .data
            .options
            .iter()
            .map(|option| json!({ "name": option.name, "value": format!("{:?}", option.value) }))
            .collect::<Vec<_>>();

        let mut event = Self::base(
            command.id.get(),
            &command.token,
            &command.user,
            command.guild_id,
            command.channel_id,
            command.channel.as_ref(),
            cache,
        );
        event.kind = command_kind(command.data.kind);
        event.command_name = Some(command.data.name.clone());
        event.options = Some(Value::Array(options));
        event.target_id = command.data.target_id.map(|id| id.get());
        event
    }

    fn from_component(component: &ComponentInteraction, cache: &Cache) -> Self {
        let (kind, values) = component_kind(&component.data.kind);

        let mut event = Self::base(
            component.id.get(),
            &component.token,
            &component.user,
            component.guild_id,
            component.channel_id,
            component.channel.as_ref(),
            cache,
        );
        event.kind = kind;
        event.custom_id = Some(component.data.custom_id.clone());
        event.values = values;
        event
    }

    fn from_modal(modal: &ModalInteraction, cache: &Cache) -> Self {
        let mut event = Self::base(
            modal.id.get(),
            &modal.token,
            &modal.user,
            modal.guild_id,
            modal.channel_id,
            modal.channel.as_ref(),
            cache,
        );
        event.custom_id = Some(modal.data.custom_id.clone());
        event
    }

    fn base(
        id: u64,
        token: &str,
        user: &User,
        guild_id: Option<GuildId>,
        channel_id: ChannelId,
        channel: Option<&PartialChannel>,
        cache: &Cache,
    ) -> Self {
        Self {
            id,
            kind: InteractionKind::Other,
            command_name: None,
            custom_id: None,
            token: token.to_string(),
            user: InteractionUser {
                id: user.id.get(),
                name: user.name.clone(),
                avatar_url: user.avatar_url(),
            },
            channel: Some(ChannelRef {
                id: channel_id.get(),
                name: channel.and_then(|c| c.name.clone()),
            }),
            guild: guild_id.map(|guild_id| GuildRef {
                id: guild_id.get(),
                name: cache.guild(guild_id).map(|guild| guild.name.clone()),
            }),
            options: None,
            values: Vec::new(),
            target_id: None,
        }
    }

    /// Structured snapshot attached to the telemetry transaction of this interaction.
    ///
    /// Unlike the serialized event, the snapshot carries the interaction token.
    /// Interactions without options get the `NO_OPTIONS` placeholder.
    pub fn snapshot(&self) -> InteractionSnapshot {
        InteractionSnapshot {
            id: self.id.to_string(),
            kind: self.kind,
            token: self.token.clone(),
            channel: self.channel.clone(),
            guild: self.guild.clone(),
            user: SnapshotUser {
                id: self.user.id,
                name: self.user.name.clone(),
            },
            options: self
                .options
                .clone()
                .unwrap_or_else(|| Value::String(NO_OPTIONS.to_string())),
        }
    }
}

/// Slash commands are commands; user and message commands are context menus.
fn command_kind(kind: CommandType) -> InteractionKind {
    match kind {
        CommandType::ChatInput => InteractionKind::Command,
        CommandType::User | CommandType::Message => InteractionKind::ContextMenu,
        _ => InteractionKind::Other,
    }
}

/// Kind of a component interaction and its selected values, rendered as strings.
fn component_kind(kind: &ComponentInteractionDataKind) -> (InteractionKind, Vec<String>) {
    match kind {
        ComponentInteractionDataKind::Button => (InteractionKind::Button, Vec::new()),
        ComponentInteractionDataKind::StringSelect { values } => {
            (InteractionKind::SelectMenu, values.clone())
        }
        ComponentInteractionDataKind::UserSelect { values } => {
            (InteractionKind::SelectMenu, to_strings(values))
        }
        ComponentInteractionDataKind::RoleSelect { values } => {
            (InteractionKind::SelectMenu, to_strings(values))
        }
        ComponentInteractionDataKind::MentionableSelect { values } => {
            (InteractionKind::SelectMenu, to_strings(values))
        }
        ComponentInteractionDataKind::ChannelSelect { values } => {
            (InteractionKind::SelectMenu, to_strings(values))
        }
        _ => (InteractionKind::Other, Vec::new()),
    }
}

fn to_strings<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Telemetry view of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub token: String,
    pub channel: Option<ChannelRef>,
    pub guild: Option<GuildRef>,
    pub user: SnapshotUser,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotUser {
    pub id: u64,
    pub name: String,
}
