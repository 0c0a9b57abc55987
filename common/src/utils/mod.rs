//! Utility functions and helpers.

pub mod html_escape;

// Re-export commonly used types
pub use html_escape::HtmlEscaper;
