use std::io::Write;

use chrono::NaiveDateTime;
use snafu::ResultExt;
use tracing::{Level, Span, event, instrument};

use crate::{
    CompileError, Element, FixRecord, OutputSink, RecordSource, RenderOptions, TimeWindow,
    TrackFilter, TrackSegmenter, TrackSummary,
    compile_error::{InvalidWindowSnafu, SinkUnavailableSnafu, SourceUnavailableSnafu},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompileRequest {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub filter: TrackFilter,
    pub options: RenderOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompileReport {
    pub segments: usize,
    pub records: usize,
    pub tracks: Vec<TrackSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompileOutcome {
    Compiled(CompileReport),
    /// The source had no fixes for the request, the sink was never opened.
    NoData,
}

/// Compiles the fixes matching `request` into a KML overlay written to `sink`.
///
/// The window is validated before the source is queried and the sink is only opened when there
/// is something to write. Nothing is retried.
#[instrument(
    skip_all,
    fields(
        start = %request.start,
        stop = %request.stop,
        filter = %request.filter,
        options = %request.options,
        records = tracing::field::Empty,
        segments = tracing::field::Empty,
    )
)]
pub async fn compile<S, O>(
    request: &CompileRequest,
    source: &S,
    sink: &mut O,
) -> Result<CompileOutcome, CompileError>
where
    S: RecordSource + ?Sized,
    O: OutputSink,
{
    let window = TimeWindow::new(request.start, request.stop).context(InvalidWindowSnafu)?;

    let records = source
        .fix_records(&window, &request.filter)
        .await
        .context(SourceUnavailableSnafu)?;

    let span = Span::current();
    span.record("records", records.len());

    if records.is_empty() {
        event!(Level::INFO, "no fixes matched the request");
        return Ok(CompileOutcome::NoData);
    }

    let report = write_document(&window, &records, request.options, sink)?;
    span.record("segments", report.segments);

    Ok(CompileOutcome::Compiled(report))
}

/// Writes the full document for already ordered `records` in a single pass.
pub fn write_document<'a, O: OutputSink>(
    window: &'a TimeWindow,
    records: &'a [FixRecord],
    options: RenderOptions,
    sink: &mut O,
) -> Result<CompileReport, CompileError> {
    let mut writer = sink.open().context(SinkUnavailableSnafu)?;

    let mut fragments = vec![Element::DocumentOpen { window }];
    let mut segmenter = TrackSegmenter::new(options);

    for record in records {
        segmenter.push(record, &mut fragments);
        write_fragments(&mut writer, &mut fragments)?;
    }

    let tracks = segmenter.finish(&mut fragments);
    fragments.push(Element::DocumentClose);
    write_fragments(&mut writer, &mut fragments)?;

    writer.flush().context(SinkUnavailableSnafu)?;

    Ok(CompileReport {
        segments: tracks.len(),
        records: records.len(),
        tracks,
    })
}

fn write_fragments<W: Write>(
    writer: &mut W,
    fragments: &mut Vec<Element<'_>>,
) -> Result<(), CompileError> {
    for fragment in fragments.drain(..) {
        write!(writer, "{fragment}").context(SinkUnavailableSnafu)?;
    }
    Ok(())
}
