mod serve;
mod submit;

pub use serve::serve;
pub use submit::{SubmitArgs, submit};
