//! Handlers shipped with the bot.
//!
//! `registry()` is the single registration list: adding a handler means writing it in one
//! of the submodules and listing it here.

pub mod commands;
pub mod events;
pub mod interactions;

use crate::{error::registry::RegistryError, registry::Registry};

/// Builds the registry with every shipped handler.
pub fn registry() -> Result<Registry, RegistryError> {
    Registry::builder()
        .command(commands::ping::PingCommand)
        .interaction(interactions::button::ButtonHandler)
        .interaction(interactions::selectmenu::SelectMenuHandler)
        .interaction(interactions::user_info::UserInfoMenu)
        .event(events::guild_create::GuildCreateListener)
        .event(events::invite_create::InviteCreateListener)
        .build()
}
