use futures::TryStreamExt;
use snafu::ResultExt;
use tracing::instrument;
use tracks_core::{TimeWindow, TrackFilter, TrackId};

use crate::{error::error::QuerySnafu, models, PostgresAdapter, Result};

impl PostgresAdapter {
    #[instrument(skip(self), fields(records = tracing::field::Empty))]
    pub(crate) async fn fix_records_impl(
        &self,
        window: &TimeWindow,
        filter: &TrackFilter,
    ) -> Result<Vec<tracks_core::FixRecord>> {
        let records = sqlx::query_as::<_, models::FixRecord>(
            r#"
SELECT
    transmitter,
    "timestamp",
    latitude,
    longitude,
    flag
FROM
    track
WHERE
    "timestamp" BETWEEN $1 AND $2
    AND (
        $3::TEXT IS NULL
        OR transmitter = $3
    )
ORDER BY
    transmitter,
    "timestamp"
            "#,
        )
        .bind(window.start())
        .bind(window.stop())
        .bind(filter.track_id().map(TrackId::as_str))
        .fetch(&self.pool)
        .map_ok(tracks_core::FixRecord::from)
        .try_collect::<Vec<_>>()
        .await
        .context(QuerySnafu)?;

        tracing::Span::current().record("records", records.len());

        Ok(records)
    }

    pub(crate) async fn track_names_impl(&self) -> Result<Vec<TrackId>> {
        sqlx::query_scalar::<_, TrackId>(
            r#"
SELECT DISTINCT
    transmitter
FROM
    track
ORDER BY
    transmitter
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context(QuerySnafu)
    }

    pub(crate) async fn extent_impl(&self) -> Result<Option<tracks_core::TrackExtent>> {
        let extent = sqlx::query_as::<_, models::TrackExtent>(
            r#"
SELECT
    MIN("timestamp") AS start,
    MAX("timestamp") AS stop,
    MAX(latitude) AS north,
    MIN(latitude) AS south,
    MAX(longitude) AS east,
    MIN(longitude) AS west
FROM
    track
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .context(QuerySnafu)?;

        Ok(extent.into())
    }
}
