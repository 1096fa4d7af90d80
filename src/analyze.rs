//! Transport for the mood server's analyze endpoint
//!
//! Defines the wire types, the AnalyzeError type, the transport trait the
//! panel is generic over, and the reqwest-backed client.

use std::future::Future;

use thiserror::Error;

mod client;
mod protocol;

pub use client::{ANALYZE_PATH, AnalyzeClient};
pub use protocol::{AnalyzeRequest, AnalyzeResponse};

/// Errors that can occur while asking the server for a suggestion
///
/// The page shows the same message for all of them; the variants exist
/// for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Connection failed or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not an analyze response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Something that can answer an analyze request
pub trait AnalyzeTransport {
    fn analyze(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<AnalyzeResponse, AnalyzeError>> + Send;
}
