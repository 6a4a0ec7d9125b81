use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::TrackId;

/// KML line colors in `aabbggrr` order, all at the same translucency.
pub const PALETTE: [&str; 30] = [
    "990000FF", "9900FF00", "99FF0000", "9900FFFF", "99FF00FF", "99FFFF00", "990000CC",
    "9900CC00", "99CC0000", "9900CCCC", "99CC00CC", "99CCCC00", "99000099", "99009900",
    "99990000", "99009999", "99990099", "99999900", "99000066", "99006600", "99660000",
    "99006666", "99660066", "99666600", "99000033", "99003300", "99330000", "99003333",
    "99330033", "99333300",
];

pub const DEFAULT_COLOR: &str = PALETTE[1];

/// Line color of a track's trace, the same identity always gets the same color.
pub fn color_for(track_id: &TrackId, color_by_identity: bool) -> &'static str {
    if !color_by_identity {
        return DEFAULT_COLOR;
    }

    let index = identity_hash(track_id).unsigned_abs() as usize % PALETTE.len();
    PALETTE[index]
}

fn identity_hash(track_id: &TrackId) -> i32 {
    let mut hasher = DefaultHasher::new();
    track_id.as_str().hash(&mut hasher);
    // Folded to 32 bits so the sign can be dropped the same way for every platform.
    hasher.finish() as u32 as i32
}
