use chrono::NaiveDateTime;
use sqlx::FromRow;
use tracks_core::TrackId;

#[derive(Debug, Clone, FromRow)]
pub struct FixRecord {
    pub transmitter: String,
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub flag: i32,
}

#[derive(Debug, Clone, FromRow)]
pub struct TrackExtent {
    pub start: Option<NaiveDateTime>,
    pub stop: Option<NaiveDateTime>,
    pub north: Option<f64>,
    pub south: Option<f64>,
    pub east: Option<f64>,
    pub west: Option<f64>,
}

impl From<FixRecord> for tracks_core::FixRecord {
    fn from(value: FixRecord) -> Self {
        let FixRecord {
            transmitter,
            timestamp,
            latitude,
            longitude,
            flag,
        } = value;

        Self {
            track_id: TrackId::new(transmitter),
            timestamp,
            latitude,
            longitude,
            flag,
        }
    }
}

impl From<TrackExtent> for Option<tracks_core::TrackExtent> {
    fn from(value: TrackExtent) -> Self {
        Some(tracks_core::TrackExtent {
            start: value.start?,
            stop: value.stop?,
            north: value.north?,
            south: value.south?,
            east: value.east?,
            west: value.west?,
        })
    }
}
