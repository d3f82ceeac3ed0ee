//! Thread Summary -- classify a conversation's latest record and render the
//! styled one-line summary shown in a thread list.
//!
//! Pure library: `classify` picks a `SummaryCategory` by strict priority over
//! type-code predicates and content flags, `render` turns it into a
//! `StyledSummary` (text + emphasis ranges) through a `TextProvider`.

// Core types
pub mod category;
pub mod constants;
pub mod error;
pub mod styled;
pub mod thread;
pub mod types;

// Engine
pub mod classifier;
pub mod renderer;
pub mod text;

// Host support
pub mod config;
pub mod tracing_init;

#[cfg(test)]
mod test_helpers;

// Re-exports for convenience
pub use category::SummaryCategory;
pub use classifier::{classify, Classifier};
pub use error::{SummaryError, SummaryResult};
pub use renderer::{render, summarize, Renderer};
pub use styled::{EmphasisRange, MarkupStyle, StyledSummary};
pub use text::{TemplateKey, TextProvider};
pub use thread::ThreadMetadata;
pub use types::{BitmaskTypes, MessageTypes};
