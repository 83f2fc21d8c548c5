use tracing::{debug, info, warn};
use uuid::Uuid;

use super::radial_view::RadialView;
use crate::domain::app_state::AppState;

/// In-flight drag of a reminder. At most one exists at a time; it lives from
/// drag-start until the drop or cancel that returns the view to idle.
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    pub reminder_id: Uuid,
    pub source_area: String,
}

impl RadialView {
    pub fn is_dragging(&self) -> bool {
        self.drag_context.is_some()
    }

    /// Begins a drag. A second drag-start while one is in flight is ignored;
    /// the original context stays in place.
    pub fn start_drag(&mut self, reminder_id: Uuid, source_area: &str) {
        if let Some(existing) = &self.drag_context {
            debug!(
                active = %existing.reminder_id,
                rejected = %reminder_id,
                "drag already in flight; ignoring second drag-start"
            );
            return;
        }
        debug!(reminder_id = %reminder_id, source_area, "drag started");
        self.drag_context = Some(DragContext {
            reminder_id,
            source_area: source_area.to_string(),
        });
    }

    /// Updates the hovered drop target. Fires on every pointer move over an
    /// area, so it only touches the hover field; reminder data is never read
    /// or written here.
    pub fn drag_over(&mut self, area: &str) {
        if self.drag_context.is_none() {
            return;
        }
        if self.hovered_area.as_deref() != Some(area) {
            self.hovered_area = Some(area.to_string());
        }
    }

    /// Commits the drag onto `target_area`. Dropping back on the source area
    /// changes nothing; a reminder that vanished mid-drag is a silent no-op.
    /// Drag and hover state are cleared unconditionally either way.
    ///
    /// Returns whether a reminder actually moved.
    pub fn drop_on(&mut self, state: &mut AppState, target_area: &str) -> bool {
        let context = match self.drag_context.take() {
            Some(context) => context,
            None => return false,
        };
        self.hovered_area = None;

        if context.source_area == target_area {
            debug!(reminder_id = %context.reminder_id, "dropped on source area; nothing to do");
            return false;
        }

        match state.move_reminder(context.reminder_id, &context.source_area, target_area) {
            Ok(true) => {
                info!(
                    reminder_id = %context.reminder_id,
                    from = %context.source_area,
                    to = target_area,
                    "reminder reassigned"
                );
                true
            }
            Ok(false) => false,
            Err(error) => {
                warn!(%error, "drop target rejected; reminder left in place");
                false
            }
        }
    }

    /// Drag ended without a drop (pointer released outside every area).
    /// Returns to idle with zero side effects.
    pub fn end_drag(&mut self) {
        if self.drag_context.is_some() {
            debug!("drag cancelled");
        }
        self.drag_context = None;
        self.hovered_area = None;
    }
}
