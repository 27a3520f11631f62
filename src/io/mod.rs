mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{parse_document, read_document};
pub use output::{OutputOptions, render};
