//! moodboard: a client for a mood analysis server
//!
//! The [`panel::MoodPanel`] drives a [`page::Page`] the way the mood page's
//! script drives its DOM: it reads the input, posts it to `/analyze`, and
//! paints the suggestion and colors that come back. Navigation to the chat
//! and song routes goes through the same page handle.

pub mod analyze;
pub mod config;
pub mod error;
pub mod page;
pub mod panel;

pub use analyze::{AnalyzeClient, AnalyzeError, AnalyzeResponse, AnalyzeTransport};
pub use error::MoodError;
pub use page::{MemoryPage, Page, ResultText, Route};
pub use panel::{MoodPanel, Outcome, PendingAnalysis};

#[cfg(test)]
mod test_utils;
