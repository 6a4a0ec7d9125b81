mod extent;
mod filter;
mod fix;
mod options;
mod time_window;

pub use extent::*;
pub use filter::*;
pub use fix::*;
pub use options::*;
pub use time_window::*;
