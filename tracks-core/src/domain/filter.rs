use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{FixRecord, ParseError, TrackId, parse_error::EmptySnafu};

pub const ALL_TRACKS: &str = "All";

/// Which tracks to include in an overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum TrackFilter {
    #[default]
    All,
    Track(TrackId),
}

impl TrackFilter {
    pub fn track_id(&self) -> Option<&TrackId> {
        match self {
            TrackFilter::All => None,
            TrackFilter::Track(id) => Some(id),
        }
    }

    pub fn matches(&self, record: &FixRecord) -> bool {
        match self {
            TrackFilter::All => true,
            TrackFilter::Track(id) => record.track_id == *id,
        }
    }
}

impl FromStr for TrackFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => EmptySnafu { parameter: "track" }.fail(),
            ALL_TRACKS | "*" => Ok(TrackFilter::All),
            v => Ok(TrackFilter::Track(TrackId::from(v))),
        }
    }
}

impl Display for TrackFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackFilter::All => f.write_str(ALL_TRACKS),
            TrackFilter::Track(id) => id.fmt(f),
        }
    }
}
