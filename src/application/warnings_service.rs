// Warnings service - Use cases driven by the presentation layer
use crate::application::warning_feed::{FeedError, WarningFeed};
use crate::domain::aggregate::{AggregateSeries, AlertAggregator};
use crate::domain::observation::{ObservationEntry, ObservationLog, ValidationError};
use crate::domain::table::{Column, FilterSelection, FilteredView, WarningTable};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct WarningsService {
    feed: Arc<dyn WarningFeed>,
}

impl WarningsService {
    pub fn new(feed: Arc<dyn WarningFeed>) -> Self {
        Self { feed }
    }

    /// Fetch the feed and build a fresh table.
    ///
    /// Nothing is kept on failure; callers decide whether to swap the
    /// result into a session.
    pub async fn load_warnings(&self) -> Result<WarningTable, FeedError> {
        match self.feed.fetch().await {
            Ok(records) => {
                tracing::info!("Loaded {} warnings from feed", records.len());
                Ok(WarningTable::new(records))
            }
            Err(e) => {
                tracing::error!("Failed to load warnings: {}", e);
                Err(e)
            }
        }
    }

    pub fn list_types(table: &WarningTable) -> BTreeSet<String> {
        table.distinct_values(Column::AwarenessType)
    }

    pub fn list_levels(table: &WarningTable) -> BTreeSet<String> {
        table.distinct_values(Column::AwarenessLevel)
    }

    pub fn list_areas(table: &WarningTable) -> BTreeSet<String> {
        table.distinct_values(Column::AreaId)
    }

    pub fn apply_filter<'a>(table: &'a WarningTable, selection: &FilterSelection) -> FilteredView<'a> {
        let view = table.filter(selection);
        tracing::debug!(
            "Filter types={:?} levels={:?} kept {} of {} rows",
            selection.types,
            selection.levels,
            view.len(),
            table.len()
        );
        view
    }

    pub fn compute_aggregates(table: &WarningTable, view: &FilteredView<'_>) -> AggregateSeries {
        AlertAggregator::compute(table, view)
    }

    pub fn submit_observation(
        log: &mut ObservationLog,
        entry: ObservationEntry,
    ) -> Result<(), ValidationError> {
        let occurrence = entry.occurrence_type;
        match log.append(entry) {
            Ok(()) => {
                tracing::info!("Recorded {} observation ({} in log)", occurrence, log.len());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected observation: {}", e);
                Err(e)
            }
        }
    }

    pub fn export_log(log: &ObservationLog) -> Vec<ObservationEntry> {
        log.snapshot().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::warning_feed::testing::StaticFeed;
    use crate::domain::observation::{OccurrenceType, ValidationMode};
    use crate::domain::session::Session;
    use crate::domain::warning::WarningRecord;

    fn wind_feed() -> StaticFeed {
        StaticFeed::Records(vec![
            WarningRecord::new("Wind", "orange", "2024-01-01T00:00"),
            WarningRecord::new("Wind", "yellow", "2024-01-01T06:00"),
        ])
    }

    #[tokio::test]
    async fn test_load_and_filter_wind_warnings() {
        let service = WarningsService::new(Arc::new(wind_feed()));
        let table = service.load_warnings().await.unwrap();

        let view = WarningsService::apply_filter(&table, &FilterSelection::new(["Wind"], ["orange"]));
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows()[0].awareness_level_id, "orange");

        let view = WarningsService::apply_filter(
            &table,
            &FilterSelection::new(Vec::<String>::new(), ["orange"]),
        );
        assert!(view.is_empty());
    }

    #[tokio::test]
    async fn test_empty_feed_has_no_choices_or_aggregates() {
        let service = WarningsService::new(Arc::new(StaticFeed::Records(Vec::new())));
        let table = service.load_warnings().await.unwrap();

        assert!(WarningsService::list_types(&table).is_empty());
        assert!(WarningsService::list_levels(&table).is_empty());

        let view = WarningsService::apply_filter(&table, &FilterSelection::new(["Wind"], ["red"]));
        let series = WarningsService::compute_aggregates(&table, &view);
        assert!(series.by_type_and_time.is_empty());
        assert!(series.by_time.is_empty());
        assert!(series.by_level.is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_leaves_session_untouched() {
        let good = WarningsService::new(Arc::new(wind_feed()));
        let mut session = Session::new(ValidationMode::Lenient);
        session.replace_table(good.load_warnings().await.unwrap());

        for feed in [StaticFeed::Unavailable, StaticFeed::Malformed] {
            let service = WarningsService::new(Arc::new(feed));
            match service.load_warnings().await {
                Ok(table) => session.replace_table(table),
                Err(FeedError::Unavailable(_)) | Err(FeedError::Parse(_)) => {}
            }
        }

        assert_eq!(session.table().map(|t| t.len()), Some(2));
    }

    #[tokio::test]
    async fn test_unavailable_feed_yields_unavailable_error() {
        let service = WarningsService::new(Arc::new(StaticFeed::Unavailable));
        let err = service.load_warnings().await.unwrap_err();
        assert!(matches!(err, FeedError::Unavailable(_)));
    }

    #[test]
    fn test_list_choices_are_sorted() {
        let table = WarningTable::new(vec![
            WarningRecord::new("Wind", "yellow", "2024-01-01T00:00"),
            WarningRecord::new("Fog", "orange", "2024-01-01T00:00"),
            WarningRecord::new("Wind", "orange", "2024-01-01T00:00"),
        ]);

        let types: Vec<String> = WarningsService::list_types(&table).into_iter().collect();
        let levels: Vec<String> = WarningsService::list_levels(&table).into_iter().collect();
        assert_eq!(types, vec!["Fog", "Wind"]);
        assert_eq!(levels, vec!["orange", "yellow"]);
    }

    #[test]
    fn test_submit_and_export_observations() {
        let mut log = ObservationLog::new(ValidationMode::Strict);

        WarningsService::submit_observation(
            &mut log,
            ObservationEntry::new("14:00", "Lisbon", "heavy rain", OccurrenceType::Precipitation),
        )
        .unwrap();
        let rejected = WarningsService::submit_observation(
            &mut log,
            ObservationEntry::new("", "Lisbon", "", OccurrenceType::Thunderstorm),
        );

        assert!(rejected.is_err());
        let exported = WarningsService::export_log(&log);
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].occurrence_type, OccurrenceType::Precipitation);
    }
}
