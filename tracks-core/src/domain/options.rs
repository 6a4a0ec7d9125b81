use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{ParseError, parse_error::EmptySnafu};

/// What to draw for each track segment, the flags are independent of each other.
///
/// Clients send these as a four character flag string, in order: trace, color each track,
/// mark start and mark end, where `Y` turns a flag on (`YNYY`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct RenderOptions {
    pub draw_trace: bool,
    pub color_by_identity: bool,
    pub mark_start: bool,
    pub mark_end: bool,
}

impl RenderOptions {
    pub fn all() -> Self {
        Self {
            draw_trace: true,
            color_by_identity: true,
            mark_start: true,
            mark_end: true,
        }
    }
}

impl FromStr for RenderOptions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return EmptySnafu {
                parameter: "options",
            }
            .fail();
        }

        let mut flags = s.chars().map(|c| c == 'Y').chain(std::iter::repeat(false));
        let mut next = || flags.next().unwrap_or_default();

        Ok(Self {
            draw_trace: next(),
            color_by_identity: next(),
            mark_start: next(),
            mark_end: next(),
        })
    }
}

impl Display for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            draw_trace,
            color_by_identity,
            mark_start,
            mark_end,
        } = *self;

        for flag in [draw_trace, color_by_identity, mark_start, mark_end] {
            f.write_str(if flag { "Y" } else { "N" })?;
        }
        Ok(())
    }
}
