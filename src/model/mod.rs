//! Domain models shared between the gateway adapter, dispatcher, and data layer.

pub mod analytics;
pub mod diagnostic;
pub mod interaction;
pub mod locale;
