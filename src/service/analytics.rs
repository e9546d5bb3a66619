//! Analytics collaborator.
//!
//! The dispatcher records one analytics event per matched interaction through the
//! `Analytics` trait before running the handler. Recording is best effort: the
//! dispatcher logs failures and carries on.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::analytics_event::AnalyticsEventRepository,
    error::AppError,
    model::{
        analytics::{AnalyticsCategory, RecordAnalyticsEventParam},
        interaction::InteractionEvent,
    },
};

#[async_trait]
pub trait Analytics: Send + Sync {
    /// Records that an interaction of `category` identified by `identifier` happened.
    async fn record(
        &self,
        category: AnalyticsCategory,
        identifier: &str,
        event: &InteractionEvent,
    ) -> Result<(), AppError>;
}

/// Analytics sink storing each event as a row in `analytics_event`.
pub struct DatabaseAnalytics {
    db: DatabaseConnection,
}

impl DatabaseAnalytics {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Analytics for DatabaseAnalytics {
    async fn record(
        &self,
        category: AnalyticsCategory,
        identifier: &str,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        let param = RecordAnalyticsEventParam::from_interaction(category, identifier, event)?;

        AnalyticsEventRepository::new(&self.db).create(param).await?;

        Ok(())
    }
}

/// Read side of the stored analytics.
pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts stored events per category, in a fixed category order.
    ///
    /// # Returns
    /// - `Ok(Vec<(AnalyticsCategory, u64)>)` - One entry per category, zero counts included
    /// - `Err(DbErr)` - Database error during one of the count queries
    pub async fn summarize(&self) -> Result<Vec<(AnalyticsCategory, u64)>, DbErr> {
        let repo = AnalyticsEventRepository::new(self.db);
        let mut totals = Vec::with_capacity(4);

        for category in [
            AnalyticsCategory::Command,
            AnalyticsCategory::Button,
            AnalyticsCategory::SelectMenu,
            AnalyticsCategory::ContextMenu,
        ] {
            totals.push((category, repo.count_by_category(category).await?));
        }

        Ok(totals)
    }
}
