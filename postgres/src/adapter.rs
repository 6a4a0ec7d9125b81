use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    ConnectOptions, PgPool,
};
use tracing::{event, instrument, Level};
use tracks_core::{
    FixRecord, RecordSource, TimeWindow, TrackCatalog, TrackExtent, TrackFilter, TrackId,
};

use crate::{
    error::error::{ConnectionSnafu, MigrateSnafu},
    PsqlLogStatements, PsqlSettings, Result,
};

#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    pub(crate) pool: PgPool,
}

impl PostgresAdapter {
    #[instrument(skip_all, fields(ip = %settings.ip, port = settings.port, db_name = ?settings.db_name))]
    pub async fn new(settings: &PsqlSettings) -> Result<PostgresAdapter> {
        let mut opts = PgConnectOptions::new()
            .username(&settings.username)
            .password(&settings.password)
            .host(&settings.ip)
            .port(settings.port);

        if let Some(db_name) = &settings.db_name {
            opts = opts.database(db_name);
        }

        if let Some(root_cert_path) = &settings.root_cert {
            opts = opts
                .ssl_root_cert(root_cert_path)
                .ssl_mode(PgSslMode::VerifyFull);
        }

        if settings.log_statements == PsqlLogStatements::Disable {
            opts = opts.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .connect_with(opts)
            .await
            .context(ConnectionSnafu)?;

        Ok(PostgresAdapter { pool })
    }

    pub async fn do_migrations(&self) -> Result<()> {
        event!(Level::INFO, "running migrations");

        sqlx::migrate!()
            .set_ignore_missing(true)
            .run(&self.pool)
            .await
            .context(MigrateSnafu)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordSource for PostgresAdapter {
    async fn fix_records(
        &self,
        window: &TimeWindow,
        filter: &TrackFilter,
    ) -> tracks_core::Result<Vec<FixRecord>> {
        Ok(self.fix_records_impl(window, filter).await?)
    }
}

#[async_trait]
impl TrackCatalog for PostgresAdapter {
    async fn track_names(&self) -> tracks_core::Result<Vec<TrackId>> {
        Ok(self.track_names_impl().await?)
    }

    async fn extent(&self) -> tracks_core::Result<Option<TrackExtent>> {
        Ok(self.extent_impl().await?)
    }
}
