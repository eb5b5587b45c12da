// Splitter layout controller
// Owns one two-pane split: the drag session, the global signal subscriptions
// and the secondary pane size, recomputed through the geometry engine.

mod geometry;
mod signals;
mod view;

use splitter_core::{
    clear_selection, LayoutConfig, LayoutGeometry, LayoutObserver, ListenerId, NoSelection,
    NoopObserver, Position, Signal, SignalHub, SignalKind, SplitterProps, TextSelection,
};

pub use geometry::compute_secondary_size;
pub use signals::SignalRegistry;
pub use view::{
    LayoutView, PaneSize, PaneView, CHANGING_CLASS, LAYOUT_CLASS, PANE_CLASS, PRIMARY_PANE_CLASS,
    SPLITTER_CLASS, VERTICAL_CLASS,
};

// ──────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Idle,
    Dragging,
}

/// The registrations made by one mount, released as a unit on unmount.
#[derive(Debug)]
struct Subscription {
    listener: ListenerId,
    kinds: Vec<SignalKind>,
}

impl Subscription {
    fn acquire(hub: &mut dyn SignalHub, listener: ListenerId) -> Self {
        let kinds = SignalKind::ALL.to_vec();
        for kind in &kinds {
            hub.add_listener(*kind, listener);
        }
        Self { listener, kinds }
    }

    fn release(self, hub: &mut dyn SignalHub) {
        for kind in self.kinds {
            if !hub.remove_listener(kind, self.listener) {
                log::warn!(
                    "layout {}: {} listener was already gone",
                    self.listener,
                    kind.name()
                );
            }
        }
    }
}

// ──────────────────────────────────────────────
// SplitterLayout
// ──────────────────────────────────────────────

pub struct SplitterLayout {
    id: ListenerId,
    props: SplitterProps,
    config: LayoutConfig,
    /// Number of children the host passed; only the first two render.
    children: usize,
    secondary_size: f64,
    last_notified_size: f64,
    session: Session,
    subscription: Option<Subscription>,
    observer: Box<dyn LayoutObserver>,
    selection: Box<dyn TextSelection>,
}

impl SplitterLayout {
    pub fn new(id: ListenerId, props: SplitterProps, children: usize) -> Self {
        let config = props.layout_config();
        Self {
            id,
            props,
            config,
            children,
            secondary_size: 0.0,
            last_notified_size: 0.0,
            session: Session::Idle,
            subscription: None,
            observer: Box::new(NoopObserver),
            selection: Box::new(NoSelection),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn LayoutObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_selection(mut self, selection: Box<dyn TextSelection>) -> Self {
        self.selection = selection;
        self
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn props(&self) -> &SplitterProps {
        &self.props
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session == Session::Dragging
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Current secondary pane size in the configured unit.
    pub fn secondary_size(&self) -> f64 {
        self.secondary_size
    }

    /// Number of panes actually rendered: one or two.
    pub fn pane_count(&self) -> usize {
        self.children.clamp(1, 2)
    }

    /// A splitter only renders between exactly two panes.
    pub fn has_splitter(&self) -> bool {
        self.pane_count() == 2
    }

    /// Update the child count after the host re-renders with different children.
    pub fn set_children(&mut self, children: usize) {
        self.children = children;
    }

    // ── Lifecycle ──

    /// Subscribe to global signals and resolve the initial secondary size.
    /// Mounting an already mounted layout does nothing.
    pub fn mount(&mut self, hub: &mut dyn SignalHub, geometry: &dyn LayoutGeometry) {
        if self.subscription.is_some() {
            log::debug!("layout {}: already mounted", self.id);
            return;
        }
        self.subscription = Some(Subscription::acquire(hub, self.id));
        log::debug!("layout {}: mounted", self.id);

        let initial = match self.props.secondary_initial_size {
            Some(size) => size,
            // A lone pane fills the container; there is no secondary to size.
            None if !self.has_splitter() => return,
            None => {
                let container = geometry.container_rect();
                let splitter = geometry.splitter_rect().unwrap_or_default();
                let position = geometry::even_split_position(container, splitter);
                compute_secondary_size(&self.config, container, splitter, position, false)
            }
        };
        self.set_secondary_size(initial);
    }

    /// Release every subscription taken by `mount` and drop any drag session
    /// without notifying. Signals and presses delivered afterwards are ignored.
    pub fn unmount(&mut self, hub: &mut dyn SignalHub) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release(hub);
            self.session = Session::Idle;
            self.last_notified_size = 0.0;
            log::debug!("layout {}: unmounted", self.id);
        }
    }

    // ── Splitter input ──

    /// Mouse pressed on the splitter element. Returns true if a drag started.
    pub fn handle_splitter_mouse_down(&mut self) -> bool {
        self.begin_drag()
    }

    /// Touch started on the splitter element. Returns true if a drag started.
    pub fn handle_splitter_touch_start(&mut self) -> bool {
        self.begin_drag()
    }

    // ── Global signals ──

    /// Handle a window or document signal this layout is subscribed to.
    pub fn handle_signal(&mut self, signal: &Signal, geometry: &dyn LayoutGeometry) {
        if !self.is_mounted() {
            log::trace!("layout {}: ignoring {} while unmounted", self.id, signal.kind().name());
            return;
        }
        match signal {
            Signal::Resize => self.resize(geometry),
            Signal::MouseMove { position } => self.drag_to(*position, geometry),
            Signal::TouchMove { touches } => {
                if let Some(position) = touches.first() {
                    self.drag_to(*position, geometry);
                }
            }
            Signal::MouseUp | Signal::TouchEnd => self.end_drag(),
        }
    }

    fn begin_drag(&mut self) -> bool {
        if !self.is_mounted() || !self.has_splitter() || self.is_dragging() {
            return false;
        }
        if let Some(capability) = clear_selection(self.selection.as_mut()) {
            log::trace!("layout {}: cleared selection via {:?}", self.id, capability);
        }
        self.session = Session::Dragging;
        log::debug!("layout {}: drag start", self.id);
        self.observer.on_drag_start();
        true
    }

    fn end_drag(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.session = Session::Idle;
        log::debug!("layout {}: drag end at {}", self.id, self.secondary_size);
        self.observer.on_drag_end();
    }

    fn drag_to(&mut self, position: Position, geometry: &dyn LayoutGeometry) {
        if !self.is_dragging() || !self.has_splitter() {
            return;
        }
        let Some(splitter) = geometry.splitter_rect() else {
            return;
        };
        let container = geometry.container_rect();
        let size = compute_secondary_size(&self.config, container, splitter, position, true);
        self.set_secondary_size(size);
    }

    /// Keep the boundary where the splitter currently sits.
    fn resize(&mut self, geometry: &dyn LayoutGeometry) {
        if !self.has_splitter() {
            return;
        }
        let Some(splitter) = geometry.splitter_rect() else {
            return;
        };
        let container = geometry.container_rect();
        let size =
            compute_secondary_size(&self.config, container, splitter, splitter.top_left(), false);
        self.set_secondary_size(size);
    }

    fn set_secondary_size(&mut self, size: f64) {
        self.secondary_size = size;
        if size != self.last_notified_size {
            log::trace!("layout {}: secondary size {}", self.id, size);
            self.last_notified_size = size;
            self.observer.on_secondary_pane_size_change(size);
        }
    }

    // ── Rendering ──

    pub fn view(&self) -> LayoutView {
        let panes = if self.has_splitter() {
            let primary = self.config.primary.index();
            (0..2)
                .map(|child| PaneView {
                    child,
                    primary: child == primary,
                    size: (child != primary).then_some(PaneSize {
                        value: self.secondary_size,
                        unit: self.config.unit,
                        orientation: self.config.orientation,
                    }),
                })
                .collect()
        } else {
            vec![PaneView {
                child: 0,
                primary: true,
                size: None,
            }]
        };

        LayoutView {
            custom_class_name: self.props.custom_class_name.clone(),
            vertical: self.config.is_vertical(),
            changing: self.is_dragging(),
            panes,
            has_splitter: self.has_splitter(),
        }
    }
}
