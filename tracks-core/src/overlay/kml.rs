use std::{
    borrow::Cow,
    fmt::{self, Display},
};

use chrono::NaiveDateTime;

use crate::{Coordinate, TimeWindow, TrackId};

pub const DOCUMENT_NAME: &str = "Tracking data file generated by RMG.";
pub const TRACE_WIDTH: u32 = 4;

/// Which end of a segment a marker stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum MarkerKind {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "end")]
    End,
}

impl MarkerKind {
    pub fn icon(&self) -> &'static str {
        match self {
            // white square
            MarkerKind::Start => "http://maps.google.com/mapfiles/kml/pal4/icon56.png",
            // white circle
            MarkerKind::End => "http://maps.google.com/mapfiles/kml/pal4/icon57.png",
        }
    }
}

/// One fragment of a KML overlay document.
///
/// Rendering a fragment is pure, the document is the concatenation of its fragments in emission
/// order. A trace is split over `TraceOpen`, any number of `TracePoint`s and `TraceClose`.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<'a> {
    DocumentOpen {
        window: &'a TimeWindow,
    },
    DocumentClose,
    Marker {
        kind: MarkerKind,
        track_id: &'a TrackId,
        timestamp: NaiveDateTime,
        coordinate: Coordinate,
    },
    TraceOpen {
        track_id: &'a TrackId,
        color: &'static str,
    },
    TracePoint(Coordinate),
    TraceClose,
}

impl Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::DocumentOpen { window } => {
                writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
                writeln!(f, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
                writeln!(f, " <Document>")?;
                writeln!(f, "  <name>{DOCUMENT_NAME}</name>")?;
                writeln!(f, "  <description>")?;
                write!(f, "These tracks are simulated. ")?;
                writeln!(
                    f,
                    "The time period starts at {}, stops at {}",
                    window.start(),
                    window.stop()
                )?;
                writeln!(f, "  </description>")
            }
            Element::DocumentClose => {
                writeln!(f, " </Document>")?;
                writeln!(f, "</kml>")
            }
            Element::Marker {
                kind,
                track_id,
                timestamp,
                coordinate,
            } => {
                writeln!(f, "  <Placemark>")?;
                writeln!(
                    f,
                    "   <name>Track {} {kind} point</name>",
                    escape(track_id.as_str())
                )?;
                writeln!(f, "   <description>{timestamp}</description>")?;
                writeln!(f, "   <Style>")?;
                writeln!(f, "    <IconStyle>")?;
                writeln!(f, "     <Icon><href>{}</href></Icon>", kind.icon())?;
                writeln!(f, "    </IconStyle>")?;
                writeln!(f, "   </Style>")?;
                writeln!(f, "   <Point>")?;
                writeln!(f, "    <coordinates>{coordinate}</coordinates>")?;
                writeln!(f, "   </Point>")?;
                writeln!(f, "  </Placemark>")
            }
            Element::TraceOpen { track_id, color } => {
                let name = escape(track_id.as_str());
                writeln!(f, "  <Placemark>")?;
                writeln!(f, "   <name>Track {name}</name>")?;
                writeln!(
                    f,
                    "   <description>This is the trace for track {name}</description>"
                )?;
                writeln!(f, "   <Style>")?;
                writeln!(f, "    <LineStyle>")?;
                writeln!(f, "     <color>{color}</color>")?;
                writeln!(f, "     <width>{TRACE_WIDTH}</width>")?;
                writeln!(f, "    </LineStyle>")?;
                writeln!(f, "   </Style>")?;
                writeln!(f, "   <LineString>")?;
                write!(f, "    <coordinates>")
            }
            Element::TracePoint(coordinate) => write!(f, "{coordinate} "),
            Element::TraceClose => {
                writeln!(f)?;
                writeln!(f, "    </coordinates>")?;
                writeln!(f, "   </LineString>")?;
                writeln!(f, "  </Placemark>")
            }
        }
    }
}

/// Escapes the characters that would otherwise break element text.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(|c| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
