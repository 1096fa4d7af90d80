//! Shared test helpers

use std::sync::Mutex;

use crate::analyze::{AnalyzeError, AnalyzeResponse, AnalyzeTransport};

pub fn smile_response() -> AnalyzeResponse {
    AnalyzeResponse {
        suggestion: "Smile!".to_string(),
        color: "#ffcc00".to_string(),
        font_color: "#000000".to_string(),
    }
}

/// Transport that answers every request with the same result and records
/// the texts it was asked about
pub struct FakeTransport {
    reply: Result<AnalyzeResponse, AnalyzeError>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn replying(response: AnalyzeResponse) -> Self {
        Self {
            reply: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: AnalyzeError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl AnalyzeTransport for FakeTransport {
    async fn analyze(&self, text: &str) -> Result<AnalyzeResponse, AnalyzeError> {
        self.requests.lock().unwrap().push(text.to_string());
        self.reply.clone()
    }
}
