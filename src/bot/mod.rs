//! Discord gateway integration.
//!
//! This module adapts Serenity to the rest of the bot. The event handler converts
//! incoming interactions into `InteractionEvent`s for the dispatcher and forwards the
//! subscribed gateway events to the registry's listeners. Replies go out through the
//! `InteractionResponder` implemented by `GatewayClient`.
//!
//! # Gateway Intents
//!
//! The bot requests the following gateway intents:
//! - `GUILDS` - Guild create/update/delete events
//! - `GUILD_MESSAGES` - Messages in guilds
//! - `GUILD_INVITES` - Invite create/delete events
//! - `GUILD_VOICE_STATES` - Voice state updates
//!
//! None of these are privileged intents.

pub mod client;
pub mod handler;
pub mod responder;
pub mod start;
