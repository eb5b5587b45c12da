// Headless host for one splitter layout: positions the splitter the way a
// flex container would, routes recorded input through the signal registry
// and keeps a transcript of everything the layout reports.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use splitter_core::{
    LayoutGeometry, LayoutObserver, Orientation, Position, PrimaryPane, Rect, Signal, SizeUnit,
};
use splitter_layout::{SignalRegistry, SplitterLayout};

use crate::script::{Script, Step};
use crate::settings::ReplaySettings;

const LAYOUT_ID: u64 = 1;

// ──────────────────────────────────────────────
// Transcript
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    DragStart,
    DragEnd,
    Size(f64),
}

#[derive(Clone, Default)]
pub struct Transcript {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl Transcript {
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }
}

impl LayoutObserver for Transcript {
    fn on_drag_start(&mut self) {
        self.entries.borrow_mut().push(Entry::DragStart);
    }

    fn on_drag_end(&mut self) {
        self.entries.borrow_mut().push(Entry::DragEnd);
    }

    fn on_secondary_pane_size_change(&mut self, size: f64) {
        self.entries.borrow_mut().push(Entry::Size(size));
    }
}

// ──────────────────────────────────────────────
// Frame: geometry snapshot
// ──────────────────────────────────────────────

/// Element rects at one instant, derived from the layout's current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub container: Rect,
    pub splitter: Option<Rect>,
}

impl Frame {
    /// Lay out the splitter after the secondary pane takes its size and the
    /// primary pane flexes into the rest.
    pub fn layout(container: Rect, thickness: f64, layout: &SplitterLayout) -> Self {
        if !layout.has_splitter() {
            return Self {
                container,
                splitter: None,
            };
        }

        let config = layout.config();
        let axis = config.orientation;
        let extent = container.extent(axis);
        let secondary = match config.unit {
            SizeUnit::Pixels => layout.secondary_size(),
            SizeUnit::Percent => layout.secondary_size() * extent / 100.0,
        };
        let start = match config.primary {
            PrimaryPane::First => extent - secondary - thickness,
            PrimaryPane::Second => secondary,
        };
        let start = container.origin(axis) + start.clamp(0.0, (extent - thickness).max(0.0));

        let splitter = match axis {
            Orientation::Horizontal => Rect::new(start, container.top, thickness, container.height),
            Orientation::Vertical => Rect::new(container.left, start, container.width, thickness),
        };
        Self {
            container,
            splitter: Some(splitter),
        }
    }
}

impl LayoutGeometry for Frame {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn splitter_rect(&self) -> Option<Rect> {
        self.splitter
    }
}

// ──────────────────────────────────────────────
// Stage
// ──────────────────────────────────────────────

pub struct Stage {
    registry: SignalRegistry,
    layout: SplitterLayout,
    container: Rect,
    thickness: f64,
    transcript: Transcript,
}

impl Stage {
    /// Build the layout described by `script` and mount it.
    pub fn new(script: &Script, settings: &ReplaySettings) -> Self {
        let transcript = Transcript::default();
        let layout = SplitterLayout::new(LAYOUT_ID, script.props.clone(), script.children)
            .with_observer(Box::new(transcript.clone()));
        let mut stage = Self {
            registry: SignalRegistry::new(),
            layout,
            container: script.container,
            thickness: settings.splitter_thickness,
            transcript,
        };
        stage.mount();
        stage
    }

    pub fn layout(&self) -> &SplitterLayout {
        &self.layout
    }

    pub fn registry(&self) -> &SignalRegistry {
        &self.registry
    }

    pub fn transcript(&self) -> Vec<Entry> {
        self.transcript.entries()
    }

    pub fn frame(&self) -> Frame {
        Frame::layout(self.container, self.thickness, &self.layout)
    }

    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.step(step);
        }
    }

    pub fn step(&mut self, step: &Step) {
        log::trace!("step {:?}", step);
        match step {
            Step::MouseDown { left, top } => {
                if self.hits_splitter(Position::new(*left, *top)) {
                    self.layout.handle_splitter_mouse_down();
                }
            }
            Step::TouchStart { left, top } => {
                if self.hits_splitter(Position::new(*left, *top)) {
                    self.layout.handle_splitter_touch_start();
                }
            }
            Step::MouseMove { left, top } => self.dispatch(Signal::MouseMove {
                position: Position::new(*left, *top),
            }),
            Step::MouseUp => self.dispatch(Signal::MouseUp),
            Step::TouchMove { touches } => self.dispatch(Signal::TouchMove {
                touches: touches.clone(),
            }),
            Step::TouchEnd => self.dispatch(Signal::TouchEnd),
            Step::Resize { width, height } => {
                self.container.width = *width;
                self.container.height = *height;
                self.dispatch(Signal::Resize);
            }
            Step::Children { count } => self.layout.set_children(*count),
            Step::Mount => self.mount(),
            Step::Unmount => self.layout.unmount(&mut self.registry),
        }
    }

    fn mount(&mut self) {
        let frame = self.frame();
        self.layout.mount(&mut self.registry, &frame);
    }

    fn hits_splitter(&self, position: Position) -> bool {
        let hit = self
            .frame()
            .splitter
            .is_some_and(|splitter| splitter.contains(position));
        if !hit {
            log::debug!("press at {:?} missed the splitter", position);
        }
        hit
    }

    /// Deliver a global signal to whoever the registry has listening.
    fn dispatch(&mut self, signal: Signal) {
        let kind = signal.kind();
        if !self.registry.is_listening(kind, self.layout.id()) {
            log::debug!("no listener for {}", kind.name());
            return;
        }
        let frame = self.frame();
        self.layout.handle_signal(&signal, &frame);
    }

    /// Human-readable transcript, optionally followed by the rendered view.
    pub fn report(&self, include_view: bool) -> String {
        let mut out = String::new();
        for entry in self.transcript() {
            let _ = match entry {
                Entry::DragStart => writeln!(out, "drag start"),
                Entry::DragEnd => writeln!(out, "drag end"),
                Entry::Size(size) => writeln!(out, "size {size}"),
            };
        }
        if include_view {
            let view = self.layout.view();
            let _ = writeln!(out, "layout: {}", view.class_name());
            for pane in &view.panes {
                match pane.size {
                    Some(size) => {
                        let _ = writeln!(
                            out,
                            "  pane {}: {} {}: {}",
                            pane.child,
                            pane.class_name(),
                            size.property(),
                            size.css_value()
                        );
                    }
                    None => {
                        let _ = writeln!(out, "  pane {}: {}", pane.child, pane.class_name());
                    }
                }
            }
            if view.has_splitter {
                let _ = writeln!(out, "  splitter");
            }
        }
        out
    }
}
