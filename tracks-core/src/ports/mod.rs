mod outbound;
mod sink;

pub use outbound::*;
pub use sink::*;
