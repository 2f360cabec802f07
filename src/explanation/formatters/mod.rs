pub mod markdown;
pub mod json;
#[cfg(feature = "api")]
pub mod html;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
#[cfg(feature = "api")]
pub use html::HtmlFormatter;
