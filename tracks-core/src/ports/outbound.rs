use crate::*;
use async_trait::async_trait;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns every fix inside the window (bounds included) matching the filter, grouped by
    /// track identity and ordered by timestamp within each group.
    async fn fix_records(
        &self,
        window: &TimeWindow,
        filter: &TrackFilter,
    ) -> Result<Vec<FixRecord>>;
}

#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn track_names(&self) -> Result<Vec<TrackId>>;
    /// `None` when there are no fixes at all.
    async fn extent(&self) -> Result<Option<TrackExtent>>;
}
