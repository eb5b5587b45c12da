use splitter_core::{Orientation, SizeUnit};

// ──────────────────────────────────────────────
// Class names
// ──────────────────────────────────────────────

pub const LAYOUT_CLASS: &str = "splitter-layout";
pub const VERTICAL_CLASS: &str = "splitter-layout-vertical";
pub const CHANGING_CLASS: &str = "layout-changing";
pub const PANE_CLASS: &str = "layout-pane";
pub const PRIMARY_PANE_CLASS: &str = "layout-pane-primary";
pub const SPLITTER_CLASS: &str = "layout-splitter";

// ──────────────────────────────────────────────
// PaneSize
// ──────────────────────────────────────────────

/// Explicit size of a non-primary pane along the split axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSize {
    pub value: f64,
    pub unit: SizeUnit,
    pub orientation: Orientation,
}

impl PaneSize {
    /// The style property the size applies to.
    pub fn property(&self) -> &'static str {
        match self.orientation {
            Orientation::Horizontal => "width",
            Orientation::Vertical => "height",
        }
    }

    /// Style value such as `173px` or `49.8046875%`.
    pub fn css_value(&self) -> String {
        format!("{}{}", self.value, self.unit.suffix())
    }
}

// ──────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PaneView {
    /// Index of the host child rendered in this pane.
    pub child: usize,
    pub primary: bool,
    /// `None` for the primary pane, which takes the remaining space.
    pub size: Option<PaneSize>,
}

impl PaneView {
    pub fn class_name(&self) -> String {
        if self.primary {
            format!("{PANE_CLASS} {PRIMARY_PANE_CLASS}")
        } else {
            PANE_CLASS.to_string()
        }
    }
}

/// Snapshot of what the host should render for one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutView {
    pub custom_class_name: Option<String>,
    pub vertical: bool,
    pub changing: bool,
    pub panes: Vec<PaneView>,
    pub has_splitter: bool,
}

impl LayoutView {
    /// Root class list: base, custom token, then the state flags.
    pub fn class_name(&self) -> String {
        let mut classes = vec![LAYOUT_CLASS];
        if let Some(custom) = self.custom_class_name.as_deref() {
            if !custom.is_empty() {
                classes.push(custom);
            }
        }
        if self.vertical {
            classes.push(VERTICAL_CLASS);
        }
        if self.changing {
            classes.push(CHANGING_CLASS);
        }
        classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split(' ').any(|c| c == class)
    }

    pub fn primary_pane(&self) -> Option<&PaneView> {
        self.panes.iter().find(|p| p.primary)
    }

    pub fn secondary_pane(&self) -> Option<&PaneView> {
        self.panes.iter().find(|p| !p.primary)
    }
}
