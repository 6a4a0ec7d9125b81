use actix_web::web;
use snafu::ResultExt;
use tracks_core::TrackId;

use crate::{
    Database,
    error::{Result, error::SourceUnavailableSnafu},
    response::Response,
};

/// Returns every track identity present in the store, sorted.
#[tracing::instrument(skip(db))]
pub async fn tracks<T: Database + 'static>(db: web::Data<T>) -> Result<Response<Vec<TrackId>>> {
    let tracks = db
        .track_names()
        .await
        .context(SourceUnavailableSnafu)?;

    Ok(Response::new(tracks))
}
