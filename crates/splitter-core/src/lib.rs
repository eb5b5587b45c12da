use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

/// Bounding box snapshot of a host element, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Extent along the axis that `orientation` splits.
    pub fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Origin along the axis that `orientation` splits.
    pub fn origin(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.left, self.top)
    }

    pub fn contains(&self, point: Position) -> bool {
        point.left >= self.left
            && point.left <= self.left + self.width
            && point.top >= self.top
            && point.top <= self.top + self.height
    }
}

/// A single sampled pointer or touch coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }
}

// ──────────────────────────────────────────────
// Layout types
// ──────────────────────────────────────────────

/// Horizontal places panes side by side; vertical stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    #[default]
    Pixels,
    Percent,
}

impl SizeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Pixels => "px",
            SizeUnit::Percent => "%",
        }
    }
}

/// Which of the two children is the flexible primary pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryPane {
    #[default]
    First,
    Second,
}

impl PrimaryPane {
    /// Any index other than 0 or 1 falls back to the first child.
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => PrimaryPane::Second,
            _ => PrimaryPane::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PrimaryPane::First => 0,
            PrimaryPane::Second => 1,
        }
    }
}

/// Normalized configuration consumed by the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutConfig {
    pub orientation: Orientation,
    pub unit: SizeUnit,
    pub primary: PrimaryPane,
    pub primary_min_size: f64,
    pub secondary_min_size: f64,
}

impl LayoutConfig {
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    pub fn is_percentage(&self) -> bool {
        self.unit == SizeUnit::Percent
    }
}

/// Host-facing options for a splitter layout. Every field is optional in
/// serialized form and falls back to its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterProps {
    pub custom_class_name: Option<String>,
    pub vertical: bool,
    pub percentage: bool,
    pub primary_index: i64,
    pub primary_min_size: f64,
    pub secondary_min_size: f64,
    /// Initial secondary size in the configured unit. `None` splits evenly.
    pub secondary_initial_size: Option<f64>,
}

impl SplitterProps {
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            orientation: if self.vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            },
            unit: if self.percentage {
                SizeUnit::Percent
            } else {
                SizeUnit::Pixels
            },
            primary: PrimaryPane::from_index(self.primary_index),
            primary_min_size: self.primary_min_size,
            secondary_min_size: self.secondary_min_size,
        }
    }
}

// ──────────────────────────────────────────────
// Signals
// ──────────────────────────────────────────────

pub type ListenerId = u64;

/// Window- and document-level signals a mounted layout listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Resize,
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

impl SignalKind {
    pub const ALL: [SignalKind; 5] = [
        SignalKind::Resize,
        SignalKind::MouseUp,
        SignalKind::MouseMove,
        SignalKind::TouchEnd,
        SignalKind::TouchMove,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Resize => "resize",
            SignalKind::MouseMove => "mousemove",
            SignalKind::MouseUp => "mouseup",
            SignalKind::TouchMove => "touchmove",
            SignalKind::TouchEnd => "touchend",
        }
    }
}

/// A delivered global signal.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Resize,
    MouseMove { position: Position },
    MouseUp,
    /// Changed touches of the event; only the first one is sampled.
    TouchMove { touches: Vec<Position> },
    TouchEnd,
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::Resize => SignalKind::Resize,
            Signal::MouseMove { .. } => SignalKind::MouseMove,
            Signal::MouseUp => SignalKind::MouseUp,
            Signal::TouchMove { .. } => SignalKind::TouchMove,
            Signal::TouchEnd => SignalKind::TouchEnd,
        }
    }
}

// ──────────────────────────────────────────────
// Trait: SignalHub
// ──────────────────────────────────────────────

/// Process-wide listener table standing in for window/document event targets.
pub trait SignalHub {
    fn add_listener(&mut self, kind: SignalKind, listener: ListenerId);
    /// Returns false if the listener was not registered for `kind`.
    fn remove_listener(&mut self, kind: SignalKind, listener: ListenerId) -> bool;
}

// ──────────────────────────────────────────────
// Trait: LayoutGeometry
// ──────────────────────────────────────────────

/// Reads the live bounding boxes of the rendered container and splitter.
pub trait LayoutGeometry {
    fn container_rect(&self) -> Rect;
    /// `None` when the host has not rendered a splitter element.
    fn splitter_rect(&self) -> Option<Rect>;
}

// ──────────────────────────────────────────────
// Trait: TextSelection
// ──────────────────────────────────────────────

/// Platform capabilities that can drop an active text selection, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCapability {
    /// Create a body text range, collapse it and select it.
    CollapseTextRange,
    /// `empty()` on the window selection.
    EmptySelection,
    /// `removeAllRanges()` on the window selection.
    RemoveAllRanges,
    /// The deprecated document-level `selection.empty()`.
    LegacyEmpty,
}

impl SelectionCapability {
    pub const PROBE_ORDER: [SelectionCapability; 4] = [
        SelectionCapability::CollapseTextRange,
        SelectionCapability::EmptySelection,
        SelectionCapability::RemoveAllRanges,
        SelectionCapability::LegacyEmpty,
    ];
}

pub trait TextSelection {
    fn supports(&self, capability: SelectionCapability) -> bool;
    fn apply(&mut self, capability: SelectionCapability);
}

/// A host without any selection capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelection;

impl TextSelection for NoSelection {
    fn supports(&self, _capability: SelectionCapability) -> bool {
        false
    }

    fn apply(&mut self, _capability: SelectionCapability) {}
}

/// Clear the selection with the first capability the host supports.
/// Returns the capability used, or `None` when nothing was available.
pub fn clear_selection(selection: &mut dyn TextSelection) -> Option<SelectionCapability> {
    let capability = SelectionCapability::PROBE_ORDER
        .into_iter()
        .find(|c| selection.supports(*c))?;
    selection.apply(capability);
    Some(capability)
}

// ──────────────────────────────────────────────
// Trait: LayoutObserver
// ──────────────────────────────────────────────

/// Host callbacks fired by a layout controller. All methods default to no-ops.
pub trait LayoutObserver {
    fn on_drag_start(&mut self) {}
    fn on_drag_end(&mut self) {}
    /// `size` is in pixels or percent depending on the layout's unit.
    fn on_secondary_pane_size_change(&mut self, _size: f64) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LayoutObserver for NoopObserver {}
