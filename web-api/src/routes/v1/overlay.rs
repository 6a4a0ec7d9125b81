use std::{collections::BTreeSet, io};

use actix_web::web::{self, Path};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_qs::actix::QsQuery as Query;
use snafu::ResultExt;
use tracing::Span;
use tracks_core::{
    ALL_TRACKS, CompileOutcome, CompileReport, CompileRequest, RenderOptions,
    TrackId, TrackSummary, compile, parse_timestamp,
};
use uuid::Uuid;

use crate::{
    Database,
    error::{
        Result,
        error::{
            InvalidParameterSnafu, NoDataSnafu, OverlayNotFoundSnafu, SinkUnavailableSnafu,
            UnexpectedSnafu,
        },
    },
    response::{KmlResponse, Response},
    settings::OverlaySettings,
};

pub const DOWNLOAD_FILENAME: &str = "overlay.kml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayParameters {
    pub start: String,
    pub stop: String,
    /// Flag string in `trace, colorEach, markStart, markEnd` order, everything enabled when omitted.
    /// An empty value is rejected.
    #[serde(default = "default_options")]
    pub options: String,
    /// Track identity, every track when omitted. An empty value is rejected.
    #[serde(default = "default_track")]
    pub track: String,
}

fn default_options() -> String {
    RenderOptions::all().to_string()
}

fn default_track() -> String {
    ALL_TRACKS.into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayPath {
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub filename: String,
    pub tracks: usize,
    pub records: usize,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub track_id: TrackId,
    pub points: usize,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

/// Compiles an overlay into the overlay directory and describes what it contains.
#[tracing::instrument(skip(db, settings), fields(overlay_id = tracing::field::Empty))]
pub async fn overlay<T: Database + 'static>(
    db: web::Data<T>,
    settings: web::Data<OverlaySettings>,
    params: Query<OverlayParameters>,
) -> Result<Response<Overlay>> {
    let request = params.into_inner().into_request()?;

    let id = Uuid::new_v4();
    Span::current().record("overlay_id", tracing::field::display(id));

    let mut document = Vec::new();
    let report = match compile(&request, db.get_ref(), &mut document).await? {
        CompileOutcome::Compiled(report) => report,
        CompileOutcome::NoData => return NoDataSnafu.fail(),
    };

    let filename = format!("{id}.kml");
    tokio::fs::write(settings.output_dir.join(&filename), document)
        .await
        .context(SinkUnavailableSnafu)?;

    Ok(Response::new(Overlay::new(filename, report)))
}

/// Compiles an overlay in memory and returns it as a download.
#[tracing::instrument(skip(db))]
pub async fn overlay_kml<T: Database + 'static>(
    db: web::Data<T>,
    params: Query<OverlayParameters>,
) -> Result<KmlResponse> {
    let request = params.into_inner().into_request()?;
    let mut document = Vec::new();

    match compile(&request, db.get_ref(), &mut document).await? {
        CompileOutcome::Compiled(_) => Ok(KmlResponse {
            document,
            attachment: Some(DOWNLOAD_FILENAME.into()),
        }),
        CompileOutcome::NoData => NoDataSnafu.fail(),
    }
}

/// Serves a previously compiled overlay.
#[tracing::instrument(skip(settings))]
pub async fn overlay_file(
    settings: web::Data<OverlaySettings>,
    path: Path<OverlayPath>,
) -> Result<KmlResponse> {
    let filename = path.into_inner().filename;

    let is_overlay_name = filename
        .strip_suffix(".kml")
        .is_some_and(|id| Uuid::try_parse(id).is_ok());
    if !is_overlay_name {
        return OverlayNotFoundSnafu { filename }.fail();
    }

    match tokio::fs::read(settings.output_dir.join(&filename)).await {
        Ok(document) => Ok(KmlResponse {
            document,
            attachment: None,
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => OverlayNotFoundSnafu { filename }.fail(),
        Err(e) => Err(e).context(UnexpectedSnafu),
    }
}

impl OverlayParameters {
    fn into_request(self) -> Result<CompileRequest> {
        let OverlayParameters {
            start,
            stop,
            options,
            track,
        } = self;

        Ok(CompileRequest {
            start: parse_timestamp(&start).context(InvalidParameterSnafu)?,
            stop: parse_timestamp(&stop).context(InvalidParameterSnafu)?,
            filter: track.parse().context(InvalidParameterSnafu)?,
            options: options.parse().context(InvalidParameterSnafu)?,
        })
    }
}

impl Overlay {
    fn new(filename: String, report: CompileReport) -> Self {
        let CompileReport {
            segments: _,
            records,
            tracks,
        } = report;

        Overlay {
            filename,
            tracks: tracks
                .iter()
                .map(|t| &t.track_id)
                .collect::<BTreeSet<_>>()
                .len(),
            records,
            segments: tracks.into_iter().map(Segment::from).collect(),
        }
    }
}

impl From<TrackSummary> for Segment {
    fn from(value: TrackSummary) -> Self {
        let TrackSummary {
            track_id,
            points,
            first,
            last,
        } = value;

        Segment {
            track_id,
            points,
            first,
            last,
        }
    }
}
