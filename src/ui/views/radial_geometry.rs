use serde::{Deserialize, Serialize};

/// Center of the diagram, in percent-of-container units.
pub const CENTER: f64 = 50.0;
/// Radius of the main life-area circle, percent of container.
pub const MAIN_RADIUS: f64 = 38.0;
/// Radius of the outer circle where child items sit, percent of container.
pub const OUTER_RADIUS: f64 = 45.0;
/// Angular window for a group of child items: 30 degrees, whatever the count.
pub const ARC_SPAN: f64 = std::f64::consts::PI / 6.0;

/// A point in percent-of-container coordinates, so the layout is
/// resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePos {
    pub x: f64,
    pub y: f64,
}

/// Position of the `index`-th of `total` points spaced evenly on a full
/// circle. `total == 0` is treated as 1; empty groups are filtered out before
/// they reach the geometry, this just keeps the division defined.
pub fn point_on_circle(index: usize, total: usize, radius: f64, center: f64) -> NodePos {
    let total = total.max(1);
    let angle = (360.0 / total as f64 * index as f64).to_radians();
    NodePos {
        x: center + radius * angle.cos(),
        y: center + radius * angle.sin(),
    }
}

/// Position of the `index`-th of `total` child items fanned evenly inside an
/// arc of `arc_span` radians centered on `base_angle` (the angle from the
/// container center to the parent node).
pub fn point_on_arc(
    base_angle: f64,
    arc_span: f64,
    index: usize,
    total: usize,
    radius: f64,
    center: f64,
) -> NodePos {
    let total = total.max(1);
    let start = base_angle - arc_span / 2.0;
    let angle = start + arc_span / total as f64 * index as f64;
    NodePos {
        x: center + radius * angle.cos(),
        y: center + radius * angle.sin(),
    }
}

/// The overflow toggle sits at the trailing edge of the arc, past the last
/// fanned item.
pub fn overflow_toggle_angle(base_angle: f64, arc_span: f64) -> f64 {
    base_angle - arc_span / 2.0 + arc_span
}

/// Angle from the container center to `pos`.
pub fn angle_from_center(pos: NodePos, center: f64) -> f64 {
    (pos.y - center).atan2(pos.x - center)
}
