//! SeaORM entities for the bot's persisted data.

pub mod prelude;

pub mod analytics_event;
