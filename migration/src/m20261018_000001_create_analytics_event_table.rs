use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnalyticsEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(AnalyticsEvent::Id))
                    .col(string(AnalyticsEvent::Category))
                    .col(string(AnalyticsEvent::Identifier))
                    .col(string(AnalyticsEvent::InteractionId))
                    .col(string(AnalyticsEvent::UserId))
                    .col(string_null(AnalyticsEvent::GuildId))
                    .col(text(AnalyticsEvent::Payload))
                    .col(
                        timestamp_with_time_zone(AnalyticsEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_analytics_event_category")
                    .table(AnalyticsEvent::Table)
                    .col(AnalyticsEvent::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AnalyticsEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AnalyticsEvent {
    Table,
    Id,
    Category,
    Identifier,
    InteractionId,
    UserId,
    GuildId,
    Payload,
    CreatedAt,
}
