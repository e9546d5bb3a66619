//! Gateway event listeners.
//!
//! Listeners receive the event as JSON, serialized from Serenity's model, so they read
//! the Discord field names (`member_count`, `inviter.username`).

pub mod guild_create;
pub mod invite_create;
