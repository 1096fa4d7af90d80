//! The page the mood panel writes to
//!
//! [`Page`] is the set of element handles the panel needs: the text input,
//! the result area, the body background and the location. Passing it
//! explicitly keeps every dependency of the handlers visible.

mod memory;
mod render;
mod result_text;

pub use memory::MemoryPage;
pub use render::{parse_hex_color, render_page};
pub use result_text::{ANALYZING, CONNECTION_ERROR, ResultText, SUGGESTION_LABEL};

use std::fmt;

/// Navigation targets reachable from the mood page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Chat,
    Song,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Chat => "/chat",
            Route::Song => "/song",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Element handles used by the mood panel
pub trait Page {
    /// Current value of the text input
    fn input_value(&self) -> String;

    /// Replace the content of the result area
    fn set_result_text(&mut self, text: ResultText);

    /// Set the page background color, verbatim
    fn set_background_color(&mut self, color: &str);

    /// Set the result area's text color, verbatim
    fn set_result_color(&mut self, color: &str);

    /// Full-page navigation to `route`
    fn navigate(&mut self, route: Route);
}
