//! The commands behind `trino-type`.

mod explain;
mod parse;

pub use explain::explain_code;
pub use parse::{run_parse, Summary};
