use tracing::debug;

use super::radial_geometry::{point_on_circle, CENTER, MAIN_RADIUS};
use super::radial_view::RadialView;
use crate::domain::category::life_areas;

/// Below this container width the node boxes shrink.
pub const MOBILE_WIDTH: f32 = 768.0;
pub const MOBILE_SCALE: f32 = 0.8;

/// Life-area box dimensions, percent of container, before scaling.
pub const BOX_WIDTH_PCT: f32 = 22.0;
pub const BOX_HEIGHT_PCT: f32 = 11.0;

impl RadialView {
    /// Recomputes every area's position on the main circle. Pure function of
    /// the fixed area ordering, so repeated calls always land on identical
    /// positions.
    pub fn calculate_node_positions(&mut self) {
        let areas = life_areas();
        let total = areas.len();
        self.node_positions = areas
            .into_iter()
            .enumerate()
            .map(|(i, area)| (area.label, point_on_circle(i, total, MAIN_RADIUS, CENTER)))
            .collect();
    }

    /// Container resize handler. A zero or negative width means there is no
    /// container yet: keep whatever layout we had and wait for a real width.
    pub fn handle_resize(&mut self, width: f32) {
        if width <= 0.0 {
            debug!(width, "container has no width yet; deferring layout");
            return;
        }
        self.container_width = width;
        self.calculate_node_positions();
    }

    pub fn is_mobile(&self) -> bool {
        self.container_width > 0.0 && self.container_width < MOBILE_WIDTH
    }

    /// Shrinks node boxes on small containers. Angular placement never
    /// changes with scale, only box dimensions do.
    pub fn scale_factor(&self) -> f32 {
        if self.is_mobile() {
            MOBILE_SCALE
        } else {
            1.0
        }
    }

    /// Area box size in percent of container, after responsive scaling.
    pub fn node_box_pct(&self) -> (f32, f32) {
        let scale = self.scale_factor();
        (BOX_WIDTH_PCT * scale, BOX_HEIGHT_PCT * scale)
    }
}
