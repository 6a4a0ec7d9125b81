use std::{
    io,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use snafu::ResultExt;

use crate::{
    FixRecord, OutputSink, RecordSource, Result, TimeWindow, TrackCatalog, TrackExtent,
    TrackFilter, TrackId, port_error::QuerySnafu,
};

/// In-memory stand-in for the database adapter, filters and orders the same way the SQL
/// queries do.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    records: Vec<FixRecord>,
    queries: AtomicUsize,
}

/// Captures the written document and counts how often the sink was opened.
#[derive(Debug, Default)]
pub struct RecordingSink {
    buffer: Vec<u8>,
    opens: usize,
}

/// A sink whose destination can never be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

/// A record source that can never be reached.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableSource;

impl MemoryDatabase {
    pub fn new(records: Vec<FixRecord>) -> Self {
        Self {
            records,
            queries: AtomicUsize::new(0),
        }
    }

    /// Number of record queries served so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl RecordingSink {
    pub fn opens(&self) -> usize {
        self.opens
    }

    pub fn document(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}

#[async_trait]
impl RecordSource for MemoryDatabase {
    async fn fix_records(
        &self,
        window: &TimeWindow,
        filter: &TrackFilter,
    ) -> Result<Vec<FixRecord>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let mut records: Vec<FixRecord> = self
            .records
            .iter()
            .filter(|r| window.contains(r.timestamp) && filter.matches(r))
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            a.track_id
                .cmp(&b.track_id)
                .then(a.timestamp.cmp(&b.timestamp))
        });

        Ok(records)
    }
}

#[async_trait]
impl TrackCatalog for MemoryDatabase {
    async fn track_names(&self) -> Result<Vec<TrackId>> {
        let mut names: Vec<TrackId> = self.records.iter().map(|r| r.track_id.clone()).collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    async fn extent(&self) -> Result<Option<TrackExtent>> {
        let Some(first) = self.records.first() else {
            return Ok(None);
        };

        let initial = TrackExtent {
            start: first.timestamp,
            stop: first.timestamp,
            north: first.latitude,
            south: first.latitude,
            east: first.longitude,
            west: first.longitude,
        };

        Ok(Some(self.records.iter().fold(initial, |e, r| TrackExtent {
            start: e.start.min(r.timestamp),
            stop: e.stop.max(r.timestamp),
            north: e.north.max(r.latitude),
            south: e.south.min(r.latitude),
            east: e.east.max(r.longitude),
            west: e.west.min(r.longitude),
        })))
    }
}

#[async_trait]
impl RecordSource for UnavailableSource {
    async fn fix_records(
        &self,
        _window: &TimeWindow,
        _filter: &TrackFilter,
    ) -> Result<Vec<FixRecord>> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
            .boxed()
            .context(QuerySnafu)
    }
}

#[async_trait]
impl TrackCatalog for UnavailableSource {
    async fn track_names(&self) -> Result<Vec<TrackId>> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
            .boxed()
            .context(QuerySnafu)
    }

    async fn extent(&self) -> Result<Option<TrackExtent>> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
            .boxed()
            .context(QuerySnafu)
    }
}

impl OutputSink for RecordingSink {
    type Writer<'a> = &'a mut Vec<u8>;

    fn open(&mut self) -> io::Result<Self::Writer<'_>> {
        self.opens += 1;
        self.buffer.clear();
        Ok(&mut self.buffer)
    }
}

impl OutputSink for FailingSink {
    type Writer<'a> = io::Sink;

    fn open(&mut self) -> io::Result<Self::Writer<'_>> {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ))
    }
}

/// Builds `count` fixes for `track`, one minute apart, starting at `start` and moving north-east.
pub fn track_fixes(track: &str, start: NaiveDateTime, count: usize) -> Vec<FixRecord> {
    (0..count)
        .map(|i| FixRecord {
            track_id: TrackId::from(track),
            timestamp: start + Duration::minutes(i as i64),
            latitude: 38.5 + i as f64 * 0.001,
            longitude: -121.74 + i as f64 * 0.001,
            flag: 0,
        })
        .collect()
}

pub fn test_time(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 7, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
