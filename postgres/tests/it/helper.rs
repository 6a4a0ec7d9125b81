use std::{env, future::Future, panic};

use postgres::{PostgresAdapter, PsqlLogStatements, PsqlSettings};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use tracks_core::FixRecord;
use uuid::Uuid;

pub struct TestHelper {
    pub adapter: PostgresAdapter,
    pool: PgPool,
}

impl TestHelper {
    pub async fn add_fixes(&self, fixes: impl IntoIterator<Item = FixRecord>) {
        for fix in fixes {
            sqlx::query(
                r#"
INSERT INTO
    track (transmitter, "timestamp", latitude, longitude, flag)
VALUES
    ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(fix.track_id.as_str())
            .bind(fix.timestamp)
            .bind(fix.latitude)
            .bind(fix.longitude)
            .bind(fix.flag)
            .execute(&self.pool)
            .await
            .unwrap();
        }
    }
}

fn var(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn settings(db_name: &str) -> PsqlSettings {
    PsqlSettings {
        ip: var("TRACKS_TEST_POSTGRES_IP", "127.0.0.1"),
        port: var("TRACKS_TEST_POSTGRES_PORT", "5432").parse().unwrap(),
        username: var("TRACKS_TEST_POSTGRES_USERNAME", "postgres"),
        password: var("TRACKS_TEST_POSTGRES_PASSWORD", "postgres"),
        db_name: Some(db_name.to_string()),
        max_connections: 2,
        root_cert: None,
        log_statements: PsqlLogStatements::Disable,
    }
}

async fn pool(settings: &PsqlSettings) -> PgPool {
    let opts = PgConnectOptions::new()
        .username(&settings.username)
        .password(&settings.password)
        .host(&settings.ip)
        .port(settings.port)
        .database(settings.db_name.as_deref().unwrap());

    PgPoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .unwrap()
}

/// Runs `test` against a freshly created and migrated database, which is dropped afterwards.
pub async fn test<T, Fut>(test: T)
where
    T: FnOnce(TestHelper) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let admin = pool(&settings("postgres")).await;
    let db_name = format!("tracks_test_{}", Uuid::new_v4().simple());

    sqlx::query(&format!(r#"CREATE DATABASE "{db_name}";"#))
        .execute(&admin)
        .await
        .unwrap();

    let settings = settings(&db_name);
    let adapter = PostgresAdapter::new(&settings).await.unwrap();
    adapter.do_migrations().await.unwrap();

    let helper = TestHelper {
        adapter: adapter.clone(),
        pool: pool(&settings).await,
    };
    let pool = helper.pool.clone();

    let result = tokio::spawn(test(helper)).await;

    adapter.close().await;
    pool.close().await;
    sqlx::query(&format!(r#"DROP DATABASE "{db_name}" WITH (FORCE);"#))
        .execute(&admin)
        .await
        .unwrap();

    if let Err(e) = result {
        panic::resume_unwind(e.into_panic());
    }
}
