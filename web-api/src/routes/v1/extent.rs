use actix_web::web;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_qs::actix::QsQuery as Query;
use snafu::ResultExt;
use tracks_core::{TrackExtent, parse_timestamp};

use crate::{
    Database,
    error::{
        Result,
        error::{InvalidParameterSnafu, SourceUnavailableSnafu},
    },
    response::Response,
};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtentParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_stop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extent {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Returns the time span and bounding box of all stored fixes, `null` when there are none.
/// A given start or stop replaces the stored one.
#[tracing::instrument(skip(db))]
pub async fn extent<T: Database + 'static>(
    db: web::Data<T>,
    params: Query<ExtentParameters>,
) -> Result<Response<Option<Extent>>> {
    let ExtentParameters {
        given_start,
        given_stop,
    } = params.into_inner();

    let given_start = given_start
        .as_deref()
        .map(parse_timestamp)
        .transpose()
        .context(InvalidParameterSnafu)?;
    let given_stop = given_stop
        .as_deref()
        .map(parse_timestamp)
        .transpose()
        .context(InvalidParameterSnafu)?;

    let extent = db.extent().await.context(SourceUnavailableSnafu)?;

    Ok(Response::new(extent.map(|e| {
        Extent::from(e.with_given_bounds(given_start, given_stop))
    })))
}

impl From<TrackExtent> for Extent {
    fn from(value: TrackExtent) -> Self {
        let TrackExtent {
            start,
            stop,
            north,
            south,
            east,
            west,
        } = value;

        Extent {
            start,
            stop,
            north,
            south,
            east,
            west,
        }
    }
}
