/// Status shown while a request is in flight
pub const ANALYZING: &str = "Analyzing...";

/// The single user-visible failure message
pub const CONNECTION_ERROR: &str = "Error connecting to server.";

/// Bold label in front of a suggestion
pub const SUGGESTION_LABEL: &str = "Suggestion:";

/// Content of the result area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultText {
    /// Plain status line
    Status(String),
    /// Server suggestion, shown after the bold label
    Suggestion(String),
}

impl ResultText {
    pub fn analyzing() -> Self {
        ResultText::Status(ANALYZING.to_string())
    }

    pub fn connection_error() -> Self {
        ResultText::Status(CONNECTION_ERROR.to_string())
    }

    /// Bold label rendered before the body, if any
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ResultText::Status(_) => None,
            ResultText::Suggestion(_) => Some(SUGGESTION_LABEL),
        }
    }

    pub fn body(&self) -> &str {
        match self {
            ResultText::Status(text) | ResultText::Suggestion(text) => text,
        }
    }

    /// Text as a reader sees it, label included
    pub fn plain_text(&self) -> String {
        match self.label() {
            Some(label) => format!("{} {}", label, self.body()),
            None => self.body().to_string(),
        }
    }
}
