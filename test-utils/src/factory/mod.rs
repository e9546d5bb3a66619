//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let event = factory::analytics_event::create_analytics_event(&db).await?;
//!
//! let button = factory::analytics_event::AnalyticsEventFactory::new(&db)
//!     .category("button")
//!     .identifier("confirm")
//!     .build()
//!     .await?;
//! ```

pub mod analytics_event;
pub mod helpers;
