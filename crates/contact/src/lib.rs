mod payload;
mod types;

pub use payload::*;
pub use types::*;
