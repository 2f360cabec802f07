pub mod types;
pub mod formatters;

pub use types::{ImpactReport, Prediction, INVALID_INPUT};

pub use formatters::{JsonFormatter, MarkdownFormatter};
#[cfg(feature = "api")]
pub use formatters::HtmlFormatter;
