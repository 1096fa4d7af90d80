//! Mood panel handlers
//!
//! The analyze trigger and the two navigation buttons. All three write to a
//! [`Page`] passed in by the caller.

use crate::analyze::{AnalyzeError, AnalyzeResponse, AnalyzeTransport};
use crate::page::{Page, ResultText, Route};

/// What became of one analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Suggestion and colors were painted
    Rendered,
    /// The error message was painted
    Failed,
    /// A newer analysis was started; the page was left alone
    Stale,
}

/// An analysis whose response has not arrived yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    /// Request this analysis belongs to
    pub request_id: u64,
    /// Input value captured when the analysis started
    pub text: String,
}

/// State behind the mood page's handlers
///
/// Only the latest request id is tracked. Responses for older requests are
/// discarded, so the page always shows the most recent analysis no matter
/// in which order overlapping responses arrive.
#[derive(Debug, Default)]
pub struct MoodPanel {
    request_id: u64,
}

impl MoodPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the most recently started analysis (0 before the first)
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Start an analysis: capture the input and show the interim status
    pub fn begin<P: Page>(&mut self, page: &mut P) -> PendingAnalysis {
        self.request_id = self.request_id.wrapping_add(1);
        let text = page.input_value();
        page.set_result_text(ResultText::analyzing());
        log::debug!("Starting analysis {}", self.request_id);

        PendingAnalysis {
            request_id: self.request_id,
            text,
        }
    }

    /// Apply the result of analysis `request_id` to the page
    pub fn finish<P: Page>(
        &self,
        page: &mut P,
        request_id: u64,
        result: Result<AnalyzeResponse, AnalyzeError>,
    ) -> Outcome {
        if request_id != self.request_id {
            log::debug!(
                "Discarding response for request {} (current: {})",
                request_id,
                self.request_id
            );
            return Outcome::Stale;
        }

        match result {
            Ok(response) => {
                page.set_result_text(ResultText::Suggestion(response.suggestion));
                page.set_background_color(&response.color);
                page.set_result_color(&response.font_color);
                Outcome::Rendered
            }
            Err(e) => {
                log::error!("Analysis {} failed: {}", request_id, e);
                page.set_result_text(ResultText::connection_error());
                Outcome::Failed
            }
        }
    }

    /// Run one analysis end to end
    pub async fn analyze<P, T>(&mut self, page: &mut P, transport: &T) -> Outcome
    where
        P: Page,
        T: AnalyzeTransport,
    {
        let pending = self.begin(page);
        let result = transport.analyze(&pending.text).await;
        self.finish(page, pending.request_id, result)
    }

    /// Chat button
    pub fn go_to_chat<P: Page>(&self, page: &mut P) {
        page.navigate(Route::Chat);
    }

    /// Song button
    pub fn go_to_song<P: Page>(&self, page: &mut P) {
        page.navigate(Route::Song);
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod panel_tests;
