//! Content population for tooltips and popovers
//!
//! Both kinds share one placement engine and differ only in how they fill
//! the content element: tooltips set plain text from the anchor's
//! `data-tooltip` attribute, popovers copy the markup of a template element.
//! Missing content populates an empty box instead of failing placement.

use serde::{Deserialize, Serialize};

use crate::config::TtipConfig;

/// Which kind of floating box is being shown
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Tooltip,
    Popover,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Tooltip => "tooltip",
            ContentKind::Popover => "popover",
        }
    }

    /// Delay before the two-phase reveal runs for this kind
    pub fn delay_ms(&self, config: &TtipConfig) -> i32 {
        match self {
            ContentKind::Tooltip => config.tooltip_delay_ms,
            ContentKind::Popover => config.popover_delay_ms,
        }
    }
}

/// Something content can be written into
pub trait ContentTarget {
    fn set_text(&self, text: &str);
    fn set_html(&self, html: &str);
}

impl ContentTarget for web_sys::Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_html(&self, html: &str) {
        self.set_inner_html(html);
    }
}

/// Outcome of populating a content element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Populated {
    /// Content was written; carries its length in characters
    Filled(usize),
    /// No content source was found; the box was left empty
    Empty,
}

/// Capability of filling a floating box with content
pub trait ContentProvider {
    fn kind(&self) -> ContentKind;
    fn populate(&self, target: &dyn ContentTarget) -> Populated;
}

/// Content resolved from an anchor's attributes
#[derive(Clone, Debug, PartialEq)]
pub enum ContentSource {
    /// Text from `data-tooltip`
    Tooltip { text: Option<String> },
    /// Markup of the `[data-popover-content]` template named by `data-popover`
    Popover {
        template: Option<String>,
        html: Option<String>,
    },
}

impl ContentProvider for ContentSource {
    fn kind(&self) -> ContentKind {
        match self {
            ContentSource::Tooltip { .. } => ContentKind::Tooltip,
            ContentSource::Popover { .. } => ContentKind::Popover,
        }
    }

    fn populate(&self, target: &dyn ContentTarget) -> Populated {
        match self {
            ContentSource::Tooltip { text: Some(text) } => {
                log::debug!("Add tooltip text content: {} characters.", text.chars().count());
                target.set_text(text);
                Populated::Filled(text.chars().count())
            }
            ContentSource::Tooltip { text: None } => {
                log::warn!("Tooltip anchor has no text content");
                target.set_text("");
                Populated::Empty
            }
            ContentSource::Popover { template, html: Some(html) } => {
                log::debug!("Add popover content from {:?}", template);
                target.set_html(html);
                Populated::Filled(html.chars().count())
            }
            ContentSource::Popover { template, html: None } => {
                log::warn!("No popover content template found for {:?}", template);
                target.set_html("");
                Populated::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<(&'static str, String)>>,
    }

    impl ContentTarget for Recorder {
        fn set_text(&self, text: &str) {
            self.writes.borrow_mut().push(("text", text.to_string()));
        }

        fn set_html(&self, html: &str) {
            self.writes.borrow_mut().push(("html", html.to_string()));
        }
    }

    #[test]
    fn test_tooltip_sets_text() {
        let target = Recorder::default();
        let source = ContentSource::Tooltip { text: Some("Héllo".into()) };
        assert_eq!(source.populate(&target), Populated::Filled(5));
        assert_eq!(target.writes.borrow()[0], ("text", "Héllo".to_string()));
        assert_eq!(source.kind(), ContentKind::Tooltip);
    }

    #[test]
    fn test_popover_sets_html() {
        let target = Recorder::default();
        let source = ContentSource::Popover {
            template: Some("help".into()),
            html: Some("<b>Help</b>".into()),
        };
        assert_eq!(source.populate(&target), Populated::Filled(11));
        assert_eq!(target.writes.borrow()[0], ("html", "<b>Help</b>".to_string()));
        assert_eq!(source.kind(), ContentKind::Popover);
    }

    #[test]
    fn test_missing_content_is_empty_not_error() {
        let target = Recorder::default();
        let source = ContentSource::Popover { template: Some("nope".into()), html: None };
        assert_eq!(source.populate(&target), Populated::Empty);
        assert_eq!(target.writes.borrow()[0], ("html", String::new()));

        let target = Recorder::default();
        let source = ContentSource::Tooltip { text: None };
        assert_eq!(source.populate(&target), Populated::Empty);
    }

    #[test]
    fn test_delay_per_kind() {
        let config = TtipConfig::default();
        assert_eq!(ContentKind::Tooltip.delay_ms(&config), 0);
        assert_eq!(ContentKind::Popover.delay_ms(&config), 500);
    }
}
