pub mod extent;
pub mod helper;
pub mod tracks;
