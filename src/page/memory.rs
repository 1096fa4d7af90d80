use super::{Page, ResultText, Route};

/// In-process page
///
/// Holds the same state a browser page would: the input's value, the
/// result area, the two colors and the current location. Unset colors
/// mean the page's own styling is still in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPage {
    input: String,
    result: Option<ResultText>,
    background_color: Option<String>,
    result_color: Option<String>,
    location: Option<Route>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose text input already holds `input`
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Type into the text input, replacing its value
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn result(&self) -> Option<&ResultText> {
        self.result.as_ref()
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn result_color(&self) -> Option<&str> {
        self.result_color.as_deref()
    }

    /// Path the page navigated to, if any
    pub fn location(&self) -> Option<&'static str> {
        self.location.map(Route::path)
    }

    pub fn route(&self) -> Option<Route> {
        self.location
    }
}

impl Page for MemoryPage {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_result_text(&mut self, text: ResultText) {
        self.result = Some(text);
    }

    fn set_background_color(&mut self, color: &str) {
        self.background_color = Some(color.to_string());
    }

    fn set_result_color(&mut self, color: &str) {
        self.result_color = Some(color.to_string());
    }

    fn navigate(&mut self, route: Route) {
        log::debug!("Navigating to {}", route);
        self.location = Some(route);
    }
}
