use std::net::TcpListener;

use actix_web::{
    HttpServer,
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
};
use postgres::PostgresAdapter;
use snafu::ResultExt;
use tracing::{Level, event};

use crate::{
    Database,
    error::{
        StartupError,
        startup_error::{DatabaseSnafu, OutputDirSnafu, ServerSnafu},
    },
    routes,
    settings::{Environment, Settings},
};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<Self, StartupError> {
        let listener =
            TcpListener::bind(settings.api.listener_address()).context(ServerSnafu)?;
        let port = listener.local_addr().context(ServerSnafu)?.port();

        let postgres = PostgresAdapter::new(&settings.postgres)
            .await
            .context(DatabaseSnafu)?;

        if settings.environment == Environment::Local {
            postgres.do_migrations().await.context(DatabaseSnafu)?;
        }

        let output_dir = &settings.overlay.output_dir;
        std::fs::create_dir_all(output_dir).context(OutputDirSnafu { path: output_dir })?;

        let server = create_server(postgres, listener, settings).context(ServerSnafu)?;

        event!(Level::INFO, port, "listening");

        Ok(App { server, port })
    }

    pub async fn run(self) -> Result<(), StartupError> {
        self.server.await.context(ServerSnafu)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Registers the versioned routes for a given database.
pub fn configure_routes<T: Database + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1.0")
            .route(
                "/overlay",
                web::get().to(routes::v1::overlay::overlay::<T>),
            )
            .route(
                "/overlay.kml",
                web::get().to(routes::v1::overlay::overlay_kml::<T>),
            )
            .route(
                "/overlay/{filename}",
                web::get().to(routes::v1::overlay::overlay_file),
            )
            .route("/tracks", web::get().to(routes::v1::tracks::tracks::<T>))
            .route("/extent", web::get().to(routes::v1::extent::extent::<T>)),
    );
}

fn create_server<T>(
    database: T,
    listener: TcpListener,
    settings: &Settings,
) -> std::io::Result<Server>
where
    T: Database + 'static,
{
    let not_prod = settings.environment != Environment::Production;

    let database = Data::new(database);
    let overlay = Data::new(settings.overlay.clone());

    let mut server = HttpServer::new(move || {
        actix_web::App::new()
            .app_data(database.clone())
            .app_data(overlay.clone())
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .configure(configure_routes::<T>)
    })
    .listen(listener)?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
