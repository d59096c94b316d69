//! Layout state owned by the portal shell.

/// Sidebar collapse state. Starts expanded; only [`toggle`](Self::toggle)
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiLayoutState {
    pub sidebar_collapsed: bool,
}

impl UiLayoutState {
    pub const SIDEBAR_WIDTH_PX: u32 = 240;
    pub const SIDEBAR_COLLAPSED_WIDTH_PX: u32 = 64;

    pub fn toggle(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn sidebar_width_px(&self) -> u32 {
        if self.sidebar_collapsed {
            Self::SIDEBAR_COLLAPSED_WIDTH_PX
        } else {
            Self::SIDEBAR_WIDTH_PX
        }
    }

    /// Left margin of the content area.
    pub fn content_offset_px(&self) -> u32 {
        self.sidebar_width_px()
    }

    pub fn toggle_title(&self) -> &'static str {
        if self.sidebar_collapsed {
            "Expand navigation"
        } else {
            "Collapse navigation"
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.sidebar_collapsed {
            "panel-left-open"
        } else {
            "panel-left-close"
        }
    }
}
