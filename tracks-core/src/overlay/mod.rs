mod color;
mod compiler;
mod kml;
mod segmenter;

pub use color::*;
pub use compiler::*;
pub use kml::*;
pub use segmenter::*;
