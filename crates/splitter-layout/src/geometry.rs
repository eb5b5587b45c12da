use splitter_core::{LayoutConfig, Position, PrimaryPane, Rect};

// ──────────────────────────────────────────────
// Secondary pane size
// ──────────────────────────────────────────────

/// Compute the secondary pane size for a pointer at `position`.
///
/// The result is in pixels, or in percent of the container when the config
/// uses percentage sizing. With `offset_by_half_splitter` the pointer is
/// treated as the splitter's center rather than its leading edge, which is
/// what a drag wants; resize recomputation passes the splitter's own corner
/// and leaves it off.
///
/// Clamping happens in pixel space before unit conversion. Minimum sizes are
/// resolved afterwards, primary first: if the primary pane is too small the
/// secondary gives up space down to zero, and only otherwise is the secondary
/// grown toward its own minimum, never past what the primary minimum leaves.
pub fn compute_secondary_size(
    config: &LayoutConfig,
    container: Rect,
    splitter: Rect,
    position: Position,
    offset_by_half_splitter: bool,
) -> f64 {
    let axis = config.orientation;
    let mut total = container.extent(axis);
    let mut splitter_size = splitter.extent(axis);
    let mut offset = position.along(axis) - container.origin(axis);

    if offset_by_half_splitter {
        offset -= splitter_size / 2.0;
    }

    let available = total - splitter_size;
    if offset < 0.0 {
        offset = 0.0;
    } else if offset > available {
        offset = available;
    }

    let mut secondary = match config.primary {
        PrimaryPane::Second => offset,
        PrimaryPane::First => available - offset,
    };
    let mut primary = available - secondary;

    if config.is_percentage() {
        // A collapsed container has no meaningful percentage; keep it finite.
        let to_percent = |v: f64| if total == 0.0 { 0.0 } else { v * 100.0 / total };
        secondary = to_percent(secondary);
        primary = to_percent(primary);
        splitter_size = to_percent(splitter_size);
        total = 100.0;
    }

    if primary < config.primary_min_size {
        secondary = (secondary - (config.primary_min_size - primary)).max(0.0);
    } else if secondary < config.secondary_min_size {
        secondary = (total - splitter_size - config.primary_min_size).min(config.secondary_min_size);
    }

    secondary
}

/// Pointer position that splits `container` evenly around a splitter of the
/// given extent.
pub(crate) fn even_split_position(container: Rect, splitter: Rect) -> Position {
    Position::new(
        container.left + (container.width - splitter.width) / 2.0,
        container.top + (container.height - splitter.height) / 2.0,
    )
}
