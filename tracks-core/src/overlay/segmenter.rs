use chrono::NaiveDateTime;

use crate::{Coordinate, Element, FixRecord, MarkerKind, RenderOptions, TrackId, color_for};

/// A maximal run of consecutive fixes sharing one track identity.
#[derive(Debug, Clone)]
pub struct TrackSegment<'a> {
    first: &'a FixRecord,
    last: &'a FixRecord,
    points: Vec<Coordinate>,
}

/// What remains of a segment once it has been emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSummary {
    pub track_id: TrackId,
    pub points: usize,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

#[derive(Debug)]
enum State<'a> {
    Idle,
    InSegment(TrackSegment<'a>),
}

/// Splits an ordered fix stream into track segments and emits the KML fragments of each.
///
/// A change of identity between two consecutive fixes always closes the open segment, even if
/// the identity was seen before. The fragments of a segment are, in order: start marker, trace
/// open, one trace point per fix, trace close, end marker, each subject to the render options.
/// Calling [`TrackSegmenter::finish`] closes the last segment and ends the stream.
#[derive(Debug)]
pub struct TrackSegmenter<'a> {
    options: RenderOptions,
    state: State<'a>,
    emitted: Vec<TrackSummary>,
}

impl<'a> TrackSegment<'a> {
    fn new(record: &'a FixRecord) -> Self {
        Self {
            first: record,
            last: record,
            points: vec![record.coordinate()],
        }
    }

    fn push(&mut self, record: &'a FixRecord) {
        self.points.push(record.coordinate());
        self.last = record;
    }

    pub fn track_id(&self) -> &'a TrackId {
        &self.first.track_id
    }

    pub fn last(&self) -> &'a FixRecord {
        self.last
    }

    fn summary(&self) -> TrackSummary {
        TrackSummary {
            track_id: self.first.track_id.clone(),
            points: self.points.len(),
            first: self.first.timestamp,
            last: self.last.timestamp,
        }
    }
}

impl<'a> TrackSegmenter<'a> {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            state: State::Idle,
            emitted: Vec::new(),
        }
    }

    /// Consumes the next fix of the stream, appending the fragments it triggers to `out`.
    pub fn push(&mut self, record: &'a FixRecord, out: &mut Vec<Element<'a>>) {
        if let State::InSegment(segment) = &mut self.state {
            if *segment.track_id() == record.track_id {
                segment.push(record);
                if self.options.draw_trace {
                    out.push(Element::TracePoint(record.coordinate()));
                }
                return;
            }
        }

        if let State::InSegment(segment) = std::mem::replace(&mut self.state, State::Idle) {
            self.close(segment, out);
        }
        self.open(record, out);
    }

    /// Ends the stream, returns a summary of every segment in emission order.
    pub fn finish(mut self, out: &mut Vec<Element<'a>>) -> Vec<TrackSummary> {
        if let State::InSegment(segment) = std::mem::replace(&mut self.state, State::Idle) {
            self.close(segment, out);
        }
        self.emitted
    }

    fn open(&mut self, record: &'a FixRecord, out: &mut Vec<Element<'a>>) {
        let RenderOptions {
            draw_trace,
            color_by_identity,
            mark_start,
            mark_end: _,
        } = self.options;

        if mark_start {
            out.push(Element::Marker {
                kind: MarkerKind::Start,
                track_id: &record.track_id,
                timestamp: record.timestamp,
                coordinate: record.coordinate(),
            });
        }

        if draw_trace {
            out.push(Element::TraceOpen {
                track_id: &record.track_id,
                color: color_for(&record.track_id, color_by_identity),
            });
            out.push(Element::TracePoint(record.coordinate()));
        }

        self.state = State::InSegment(TrackSegment::new(record));
    }

    fn close(&mut self, segment: TrackSegment<'a>, out: &mut Vec<Element<'a>>) {
        if self.options.draw_trace {
            out.push(Element::TraceClose);
        }

        if self.options.mark_end {
            let last = segment.last();
            out.push(Element::Marker {
                kind: MarkerKind::End,
                track_id: segment.track_id(),
                timestamp: last.timestamp,
                coordinate: last.coordinate(),
            });
        }

        self.emitted.push(segment.summary());
    }
}
