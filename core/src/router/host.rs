//! Host environment seam
//!
//! The router never touches a real browser. It reports URL changes and scroll
//! requests to a [`NavigationHost`], which in a browser build would wrap the
//! History API and the window viewport.

use serde::Serialize;

/// Viewport scroll offset in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScrollPosition {
    pub left: u32,
    pub top: u32,
}

impl ScrollPosition {
    /// Top-left corner of the page
    pub const TOP: Self = Self { left: 0, top: 0 };

    pub fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }
}

/// Host-side navigation history and viewport
pub trait NavigationHost: Send {
    /// Record a new history entry for `url`
    fn push(&mut self, url: &str);

    /// Overwrite the current history entry with `url`
    fn replace(&mut self, url: &str);

    /// Called after a back/forward traversal landed on `url`.
    ///
    /// Browsers update the address bar themselves, so the default does nothing.
    fn traversed(&mut self, _url: &str) {}

    /// Scroll the viewport
    fn scroll_to(&mut self, position: ScrollPosition);

    /// URL the host is currently showing, if any
    fn location(&self) -> Option<&str>;
}

/// An operation received by [`MemoryHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOperation {
    Push(String),
    Replace(String),
    Traverse(String),
    ScrollTo(ScrollPosition),
}

/// In-process host that records everything it is told
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    location: Option<String>,
    scroll: ScrollPosition,
    operations: Vec<HostOperation>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the given URL, as if the page had been loaded there
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Simulate the user scrolling the page
    pub fn set_scroll(&mut self, position: ScrollPosition) {
        self.scroll = position;
    }

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    /// Operations received so far, oldest first
    pub fn operations(&self) -> &[HostOperation] {
        &self.operations
    }
}

impl NavigationHost for MemoryHost {
    fn push(&mut self, url: &str) {
        self.location = Some(url.to_string());
        self.operations.push(HostOperation::Push(url.to_string()));
    }

    fn replace(&mut self, url: &str) {
        self.location = Some(url.to_string());
        self.operations.push(HostOperation::Replace(url.to_string()));
    }

    fn traversed(&mut self, url: &str) {
        self.location = Some(url.to_string());
        self.operations.push(HostOperation::Traverse(url.to_string()));
    }

    fn scroll_to(&mut self, position: ScrollPosition) {
        self.scroll = position;
        self.operations.push(HostOperation::ScrollTo(position));
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
