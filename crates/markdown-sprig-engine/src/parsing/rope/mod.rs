pub mod lines;

pub use lines::{expand_leading_tabs, source_lines};
