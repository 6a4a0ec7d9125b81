#![deny(warnings)]
#![deny(rust_2018_idioms)]

use tracks_core::{RecordSource, TrackCatalog};

pub mod error;
pub mod response;
pub mod routes;
pub mod settings;
pub mod startup;
pub mod telemetry;

pub trait Database: RecordSource + TrackCatalog {}

impl<T: RecordSource + TrackCatalog> Database for T {}
