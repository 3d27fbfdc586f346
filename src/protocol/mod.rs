//! Input and output surfaces.
//!
//! Interactive prompt entry of a plan, and text/JSON formatting of the
//! planning report.

pub mod prompt;
pub mod report;

pub use prompt::read_plan;
pub use report::{format_combination, write_json, write_text};
