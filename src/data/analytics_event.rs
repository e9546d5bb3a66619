//! Analytics event data repository for database operations.
//!
//! Provides the `AnalyticsEventRepository` used by the database-backed analytics sink
//! to store one row per matched interaction, plus the read queries used for the
//! readiness summary.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::analytics::{AnalyticsCategory, AnalyticsEvent, RecordAnalyticsEventParam};

/// Repository providing database operations for analytics events.
pub struct AnalyticsEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsEventRepository<'a> {
    /// Creates a new AnalyticsEventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AnalyticsEventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an analytics event.
    ///
    /// Snowflake ids are stored as strings, the same way Discord serializes them.
    ///
    /// # Arguments
    /// - `param` - Category, identifier, and serialized interaction to store
    ///
    /// # Returns
    /// - `Ok(AnalyticsEvent)` - The stored event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: RecordAnalyticsEventParam) -> Result<AnalyticsEvent, DbErr> {
        let entity = entity::prelude::AnalyticsEvent::insert(entity::analytics_event::ActiveModel {
            category: ActiveValue::Set(param.category.as_str().to_string()),
            identifier: ActiveValue::Set(param.identifier),
            interaction_id: ActiveValue::Set(param.interaction_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.map(|id| id.to_string())),
            payload: ActiveValue::Set(param.payload),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(AnalyticsEvent::from_entity(entity))
    }

    /// Counts stored events of one category.
    ///
    /// # Arguments
    /// - `category` - Category to count
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of stored events in the category
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_by_category(&self, category: AnalyticsCategory) -> Result<u64, DbErr> {
        entity::prelude::AnalyticsEvent::find()
            .filter(entity::analytics_event::Column::Category.eq(category.as_str()))
            .count(self.db)
            .await
    }

    /// Gets all events recorded for one interaction, oldest first.
    ///
    /// Only tests read events back per interaction.
    ///
    /// # Arguments
    /// - `interaction_id` - Discord interaction id
    ///
    /// # Returns
    /// - `Ok(Vec<AnalyticsEvent>)` - Events for the interaction (empty if none)
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn get_by_interaction_id(
        &self,
        interaction_id: u64,
    ) -> Result<Vec<AnalyticsEvent>, DbErr> {
        use sea_orm::QueryOrder;

        let entities = entity::prelude::AnalyticsEvent::find()
            .filter(entity::analytics_event::Column::InteractionId.eq(interaction_id.to_string()))
            .order_by_asc(entity::analytics_event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AnalyticsEvent::from_entity).collect())
    }
}
