/// Terminal rendition of the user selector page
use presence_core::{OptionEntry, SelectorView};
use std::fmt;
use tracing::trace;

/// In-memory page state, rendered as text
#[derive(Debug, Default, Clone)]
pub struct ConsoleView {
    pub loading_visible: bool,
    pub selector_visible: bool,
    pub options: Vec<OptionEntry>,
    pub avatar_visible: bool,
    pub avatar_src: Option<String>,
    pub error: Option<String>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Avatar URL currently on screen, if any
    pub fn visible_avatar(&self) -> Option<&str> {
        if self.avatar_visible {
            self.avatar_src.as_deref()
        } else {
            None
        }
    }
}

impl SelectorView for ConsoleView {
    fn show_loading(&mut self) {
        trace!("show loading");
        self.loading_visible = true;
    }

    fn hide_loading(&mut self) {
        trace!("hide loading");
        self.loading_visible = false;
    }

    fn hide_selector(&mut self) {
        trace!("hide selector");
        self.selector_visible = false;
    }

    fn show_selector(&mut self) {
        trace!("show selector");
        self.selector_visible = true;
    }

    fn append_option(&mut self, entry: &OptionEntry) {
        trace!(value = entry.value, label = %entry.label, "append option");
        self.options.push(entry.clone());
    }

    fn hide_avatar(&mut self) {
        trace!("hide avatar");
        self.avatar_visible = false;
    }

    fn set_avatar_source(&mut self, url: &str) {
        trace!(url = %url, "set avatar source");
        self.avatar_src = Some(url.to_string());
    }

    fn show_avatar(&mut self) {
        trace!("show avatar");
        self.avatar_visible = true;
    }

    fn show_error(&mut self, message: &str) {
        trace!(message = %message, "show error");
        self.error = Some(message.to_string());
    }
}

impl fmt::Display for ConsoleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading_visible {
            writeln!(f, "Loading...")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {}", error)?;
        }
        if self.selector_visible {
            if self.options.is_empty() {
                writeln!(f, "(no users)")?;
            }
            for option in &self.options {
                writeln!(f, "{:>8}  {}", option.value, option.label)?;
            }
        }
        if let Some(url) = self.visible_avatar() {
            writeln!(f, "Avatar: {}", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_populated() {
        let mut view = ConsoleView::new();
        view.show_selector();
        view.append_option(&OptionEntry {
            value: 10,
            label: "User 10".into(),
        });
        view.set_avatar_source("a.png");
        view.show_avatar();

        let text = view.to_string();
        assert!(text.contains("      10  User 10"));
        assert!(text.contains("Avatar: a.png"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_hidden_avatar_not_rendered() {
        let mut view = ConsoleView::new();
        view.set_avatar_source("a.png");
        view.hide_avatar();

        assert_eq!(view.visible_avatar(), None);
        assert!(!view.to_string().contains("Avatar"));
    }

    #[test]
    fn test_render_error() {
        let mut view = ConsoleView::new();
        view.show_loading();
        view.show_error("Server unreachable");
        view.hide_loading();

        assert_eq!(view.to_string(), "Error: Server unreachable\n");
    }
}
