pub use super::analytics_event::Entity as AnalyticsEvent;
