//! Service layer.
//!
//! Services sit between the dispatcher / gateway adapter and the data layer.

pub mod analytics;
