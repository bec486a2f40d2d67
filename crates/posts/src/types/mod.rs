//! Query and response types shared with the web layer.

mod queries;
mod responses;

pub use queries::*;
pub use responses::*;
