#![deny(rust_2018_idioms)]

mod domain;
mod error;
mod overlay;
mod ports;

#[cfg(any(test, feature = "test"))]
pub mod test_helper;

pub use domain::*;
pub use error::*;
pub use overlay::*;
pub use ports::*;
