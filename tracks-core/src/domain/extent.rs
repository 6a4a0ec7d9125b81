use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Temporal and spatial bounds of every stored fix.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TrackExtent {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl TrackExtent {
    /// Replaces the stored start/stop with the ones a client asked for, if any.
    pub fn with_given_bounds(
        mut self,
        given_start: Option<NaiveDateTime>,
        given_stop: Option<NaiveDateTime>,
    ) -> Self {
        if let Some(start) = given_start {
            self.start = start;
        }
        if let Some(stop) = given_stop {
            self.stop = stop;
        }
        self
    }
}
