#![deny(warnings)]
#![deny(rust_2018_idioms)]

use snafu::ResultExt;
use web_api::{
    error::{StartupError, startup_error::ConfigSnafu},
    settings::Settings,
    startup::App,
    telemetry,
};

#[snafu::report]
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let settings = Settings::new().context(ConfigSnafu)?;
    telemetry::init_tracer(settings.log_level);

    let app = App::build(&settings).await?;

    app.run().await
}
