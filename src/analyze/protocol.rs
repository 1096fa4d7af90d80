use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Reply from `POST /analyze`
///
/// Colors are CSS color values and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub suggestion: String,
    pub color: String,
    #[serde(rename = "fontColor")]
    pub font_color: String,
}
