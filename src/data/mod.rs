//! Database repository layer.
//!
//! Repositories wrap SeaORM queries and convert entity models into domain models at the
//! boundary, so services and the gateway adapter never see entity types.

pub mod analytics_event;
pub mod diagnostic;
