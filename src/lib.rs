//! Reduce an HTML dictionary dump to plain definition text.
//!
//! The pipeline is markup → tree → labelled blocks → trimmed strings, with
//! entries that produce no blocks dropped and headwords lower-cased.

pub mod error;
pub mod input;
pub mod output;
pub mod parser;

pub use error::CleanError;
pub use input::{parse_dictionary, read_dictionary, RawEntry};
pub use output::write_dictionary;
pub use parser::{transform, transform_with_progress, CleanDictionary, TransformStats};
