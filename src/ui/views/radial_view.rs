use std::collections::HashMap;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use eframe::egui::epaint::QuadraticBezierShape;

use super::connection_layer::connection_curves;
use super::radial_drag_drop::DragContext;
use super::radial_geometry::{
    angle_from_center, overflow_toggle_angle, point_on_arc, NodePos, ARC_SPAN, CENTER,
    OUTER_RADIUS,
};
use super::subnode_paging::{page_view, OverflowControl, PEOPLE_PAGE_SIZE, SUBNODE_PAGE_SIZE};
use crate::domain::app_state::AppState;
use crate::domain::category::{self, life_areas};

/// What the radial diagram reports back to the app after a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaEvent {
    AreaClicked { label: String, position: NodePos },
    AddPersonClicked,
}

/// The radial life-areas diagram: node layout, child paging, and the
/// drag-reassignment state machine. Rendering lives here; the layout and
/// drag logic live in `radial_layout.rs` and `radial_drag_drop.rs`.
pub struct RadialView {
    pub node_positions: HashMap<String, NodePos>,
    pub container_width: f32,
    pub drag_context: Option<DragContext>,
    pub hovered_area: Option<String>,
    /// Per-area overflow toggle: true while the remainder page is showing.
    pub expanded_children: HashMap<String, bool>,
}

impl Default for RadialView {
    fn default() -> Self {
        Self::new()
    }
}

impl RadialView {
    pub fn new() -> Self {
        Self {
            node_positions: HashMap::new(),
            container_width: 0.0,
            drag_context: None,
            hovered_area: None,
            expanded_children: HashMap::new(),
        }
    }

    pub fn position_of(&self, label: &str) -> Option<NodePos> {
        self.node_positions.get(label).copied()
    }

    pub fn is_expanded(&self, area: &str) -> bool {
        self.expanded_children.get(area).copied().unwrap_or(false)
    }

    pub fn toggle_expanded(&mut self, area: &str) {
        let flag = self.expanded_children.entry(area.to_string()).or_insert(false);
        *flag = !*flag;
    }

    /// The toggle is transient: once a list no longer overflows its page
    /// size, the expanded flag is dropped.
    pub fn sync_expanded(&mut self, area: &str, item_count: usize, page_size: usize) {
        if item_count <= page_size.max(1) {
            self.expanded_children.remove(area);
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) -> Vec<AreaEvent> {
        let mut events = Vec::new();
        let side = ui.available_width().min(ui.available_height()).max(0.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        self.handle_resize(rect.width());
        if self.node_positions.is_empty() {
            return events;
        }

        let painter = ui.painter_at(rect);
        let to_screen = |p: NodePos| -> Pos2 {
            Pos2::new(
                rect.left() + rect.width() * p.x as f32 / 100.0,
                rect.top() + rect.height() * p.y as f32 / 100.0,
            )
        };
        let center = to_screen(NodePos { x: CENTER, y: CENTER });

        // Decorative background curves between related areas
        for (i, curve) in connection_curves(&self.node_positions).iter().enumerate() {
            let tint = if i % 2 == 0 {
                Color32::from_rgba_unmultiplied(147, 197, 253, 60)
            } else {
                Color32::from_rgba_unmultiplied(167, 243, 208, 60)
            };
            painter.add(QuadraticBezierShape::from_points_stroke(
                [to_screen(curve.from), to_screen(curve.control), to_screen(curve.to)],
                false,
                Color32::TRANSPARENT,
                Stroke::new(rect.width() * 0.02, tint),
            ));
        }

        // Spokes from the center to every area
        for pos in self.node_positions.values() {
            painter.extend(egui::Shape::dashed_line(
                &[center, to_screen(*pos)],
                Stroke::new(1.5, Color32::from_black_alpha(50)),
                6.0,
                3.0,
            ));
        }

        // Center anchor
        let anchor_radius = if self.is_mobile() { 40.0 } else { 60.0 };
        painter.circle_filled(center, anchor_radius, Color32::from_rgb(37, 99, 235));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "Sam",
            FontId::proportional(18.0),
            Color32::WHITE,
        );

        self.show_child_nodes(ui, &painter, state, to_screen);
        self.show_area_nodes(ui, &painter, state, rect, to_screen, &mut events);
        self.show_drag_preview(ui, &painter, state);

        events
    }

    fn show_child_nodes(
        &mut self,
        ui: &Ui,
        painter: &egui::Painter,
        state: &AppState,
        to_screen: impl Fn(NodePos) -> Pos2,
    ) {
        let node_size = if self.is_mobile() {
            Vec2::new(70.0, 35.0)
        } else {
            Vec2::new(80.0, 40.0)
        };

        for area in life_areas() {
            let Some(pos) = self.position_of(&area.label) else { continue };
            let items = state.child_items(&area.label);
            if items.is_empty() {
                continue;
            }
            let page_size = if area.is_relationships() {
                PEOPLE_PAGE_SIZE
            } else {
                SUBNODE_PAGE_SIZE
            };
            self.sync_expanded(&area.label, items.len(), page_size);
            let page = page_view(&items, page_size, self.is_expanded(&area.label));

            let base = angle_from_center(pos, CENTER);
            let parent = to_screen(pos);
            let accent = area_accent(&area.label);
            let visible_count = page.visible.len();

            for (i, item) in page.visible.iter().enumerate() {
                let child_pos = point_on_arc(base, ARC_SPAN, i, visible_count, OUTER_RADIUS, CENTER);
                let child = to_screen(child_pos);
                painter.extend(egui::Shape::dashed_line(
                    &[parent, child],
                    Stroke::new(1.5, accent),
                    5.0,
                    3.0,
                ));
                let child_rect = Rect::from_center_size(child, node_size);
                painter.rect_filled(child_rect, 10.0, area_fill(&area.label).gamma_multiply(0.7));
                painter.rect_stroke(child_rect, 10.0, Stroke::new(1.0, accent));
                painter.text(
                    child,
                    Align2::CENTER_CENTER,
                    item.display_label(),
                    FontId::proportional(11.0),
                    Color32::from_gray(40),
                );
            }

            if let Some(control) = page.control {
                let angle = overflow_toggle_angle(base, ARC_SPAN);
                let toggle_pos = NodePos {
                    x: CENTER + OUTER_RADIUS * angle.cos(),
                    y: CENTER + OUTER_RADIUS * angle.sin(),
                };
                let toggle = to_screen(toggle_pos);
                painter.extend(egui::Shape::dashed_line(
                    &[parent, toggle],
                    Stroke::new(1.5, accent),
                    5.0,
                    3.0,
                ));

                let toggle_rect = Rect::from_center_size(toggle, Vec2::splat(28.0));
                let response =
                    ui.interact(toggle_rect, ui.id().with(("overflow", &area.label)), Sense::click());
                painter.circle_filled(toggle, 14.0, Color32::WHITE);
                painter.circle_stroke(toggle, 14.0, Stroke::new(1.0, accent));
                let glyph = match control {
                    OverflowControl::More(count) => format!("+{count}"),
                    OverflowControl::Collapse => "\u{2039}".to_string(),
                };
                painter.text(
                    toggle,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(12.0),
                    Color32::from_gray(60),
                );
                if response.clicked() {
                    self.toggle_expanded(&area.label);
                }
            }
        }
    }

    fn show_area_nodes(
        &mut self,
        ui: &Ui,
        painter: &egui::Painter,
        state: &mut AppState,
        rect: Rect,
        to_screen: impl Fn(NodePos) -> Pos2,
        events: &mut Vec<AreaEvent>,
    ) {
        let pointer_released = ui.input(|i| i.pointer.any_released());
        let mut handled_drop = false;
        let (box_w_pct, box_h_pct) = self.node_box_pct();
        let box_size = Vec2::new(
            rect.width() * box_w_pct / 100.0,
            rect.height() * box_h_pct / 100.0,
        );

        for area in life_areas() {
            let Some(pos) = self.position_of(&area.label) else { continue };
            let screen_pos = to_screen(pos);
            let area_rect = Rect::from_center_size(screen_pos, box_size);

            painter.rect_filled(area_rect, 12.0, area_fill(&area.label));
            let stroke = if self.hovered_area.as_deref() == Some(area.label.as_str()) {
                Stroke::new(2.5, Color32::from_rgb(59, 130, 246))
            } else {
                Stroke::new(1.5, area_accent(&area.label))
            };
            painter.rect_stroke(area_rect, 12.0, stroke);
            painter.text(
                screen_pos,
                Align2::CENTER_CENTER,
                category::display_label(&area.label),
                FontId::proportional(14.0),
                Color32::from_gray(30),
            );

            let response =
                ui.interact(area_rect, ui.id().with(("area", &area.label)), Sense::click());
            if response.clicked() {
                events.push(AreaEvent::AreaClicked {
                    label: area.label.clone(),
                    position: pos,
                });
            }

            if area.is_relationships() {
                let badge_center = area_rect.right_top() + Vec2::new(-6.0, 6.0);
                let badge_rect = Rect::from_center_size(badge_center, Vec2::splat(18.0));
                let badge = ui.interact(badge_rect, ui.id().with("add-person"), Sense::click());
                painter.circle_filled(badge_center, 9.0, Color32::WHITE);
                painter.circle_stroke(badge_center, 9.0, Stroke::new(1.0, area_accent(&area.label)));
                painter.text(
                    badge_center,
                    Align2::CENTER_CENTER,
                    "+",
                    FontId::proportional(12.0),
                    area_accent(&area.label),
                );
                if badge.clicked() {
                    events.push(AreaEvent::AddPersonClicked);
                }
            }

            if self.is_dragging() && ui.rect_contains_pointer(area_rect) {
                if pointer_released {
                    self.drop_on(state, &area.label);
                    handled_drop = true;
                } else {
                    self.drag_over(&area.label);
                }
            }
        }

        // Released outside every drop target: abandon the drag
        if pointer_released && self.is_dragging() && !handled_drop {
            self.end_drag();
        }
    }

    fn show_drag_preview(&self, ui: &Ui, painter: &egui::Painter, state: &AppState) {
        let Some(context) = &self.drag_context else { return };
        let Some(pointer) = ui.input(|i| i.pointer.interact_pos()) else { return };
        let text = state
            .find_reminder(context.reminder_id)
            .map(|(_, r)| r.text.clone())
            .unwrap_or_default();
        if text.is_empty() {
            return;
        }
        painter.text(
            pointer + Vec2::new(12.0, -12.0),
            Align2::LEFT_CENTER,
            text,
            FontId::proportional(12.0),
            Color32::from_gray(90),
        );
    }
}

pub(crate) fn area_fill(label: &str) -> Color32 {
    match label {
        "Work" => Color32::from_rgb(219, 234, 254),
        "Health" => Color32::from_rgb(209, 250, 229),
        "Relationships" => Color32::from_rgb(252, 231, 243),
        "Hobbies" => Color32::from_rgb(254, 249, 195),
        "Finance" => Color32::from_rgb(237, 233, 254),
        "Growth" => Color32::from_rgb(255, 237, 213),
        "Home" => Color32::from_rgb(254, 226, 226),
        _ => Color32::from_rgb(243, 244, 246),
    }
}

pub(crate) fn area_accent(label: &str) -> Color32 {
    match label {
        "Work" => Color32::from_rgb(59, 130, 246),
        "Health" => Color32::from_rgb(16, 185, 129),
        "Relationships" => Color32::from_rgb(236, 72, 153),
        "Hobbies" => Color32::from_rgb(245, 158, 11),
        "Finance" => Color32::from_rgb(139, 92, 246),
        "Growth" => Color32::from_rgb(249, 115, 22),
        "Home" => Color32::from_rgb(239, 68, 68),
        _ => Color32::from_rgb(107, 114, 128),
    }
}
