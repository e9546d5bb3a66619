//! Analytics event factory for creating test rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating analytics events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::analytics_event::AnalyticsEventFactory;
///
/// let event = AnalyticsEventFactory::new(&db)
///     .category("selectMenu")
///     .identifier("role-picker")
///     .build()
///     .await?;
/// ```
pub struct AnalyticsEventFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    identifier: String,
    interaction_id: String,
    user_id: String,
    guild_id: Option<String>,
}

impl<'a> AnalyticsEventFactory<'a> {
    /// Creates a new AnalyticsEventFactory with default values.
    ///
    /// Defaults:
    /// - category: `"command"`
    /// - identifier: `"command_{id}"`
    /// - interaction_id / user_id: `"{id}"` where id is auto-incremented
    /// - guild_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category: "command".to_string(),
            identifier: format!("command_{}", id),
            interaction_id: id.to_string(),
            user_id: id.to_string(),
            guild_id: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn interaction_id(mut self, interaction_id: impl ToString) -> Self {
        self.interaction_id = interaction_id.to_string();
        self
    }

    pub fn guild_id(mut self, guild_id: impl ToString) -> Self {
        self.guild_id = Some(guild_id.to_string());
        self
    }

    /// Builds and inserts the analytics event into the database.
    ///
    /// # Returns
    /// - `Ok(entity::analytics_event::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::analytics_event::Model, DbErr> {
        entity::analytics_event::ActiveModel {
            category: ActiveValue::Set(self.category),
            identifier: ActiveValue::Set(self.identifier),
            interaction_id: ActiveValue::Set(self.interaction_id),
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            payload: ActiveValue::Set("{}".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an analytics event with default values.
///
/// Shorthand for `AnalyticsEventFactory::new(db).build().await`.
pub async fn create_analytics_event(
    db: &DatabaseConnection,
) -> Result<entity::analytics_event::Model, DbErr> {
    AnalyticsEventFactory::new(db).build().await
}
