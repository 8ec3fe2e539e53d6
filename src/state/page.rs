//! Document-level page state.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::routes::DEFAULT_TITLE;

/// Title and cross-redirect flash message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    pub title: String,
    flash: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            flash: None,
        }
    }
}

impl PageState {
    /// Leave a message for the page reached after the next redirect.
    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash = Some(message.into());
    }

    /// Read and reset the pending flash message.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}
