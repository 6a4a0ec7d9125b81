pub mod extent;
pub mod overlay;
pub mod tracks;
