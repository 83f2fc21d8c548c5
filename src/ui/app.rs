use std::sync::Arc;

use eframe::egui::{self, Color32, Context, RichText};
use tracing::warn;

use super::views::radial_geometry::NodePos;
use super::views::radial_view::{AreaEvent, RadialView};
use super::widgets::reminder_editor::{EditorAction, ReminderEditor};
use crate::domain::app_state::AppState;
use crate::domain::category::RELATIONSHIPS;
use crate::domain::reminder::{Priority, Reminder};
use crate::services::{load_initial_people, RelationshipProvider};

pub struct LifeMapApp {
    pub(crate) relationships: Arc<dyn RelationshipProvider>,
    pub(crate) state: AppState,
    pub(crate) radial_view: RadialView,

    // UI state
    pub(crate) active_area: Option<String>,
    pub(crate) popup_position: NodePos,
    pub(crate) show_add_reminder_form: bool,
    pub(crate) reminder_editor: ReminderEditor,
    pub(crate) show_add_person_prompt: bool,
    pub(crate) new_person_name: String,

    // Runtime
    pub(crate) runtime: tokio::runtime::Runtime,
}

impl LifeMapApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        relationships: Arc<dyn RelationshipProvider>,
    ) -> Self {
        let mut state = AppState::sample();
        // One-shot startup fetch; a failure just leaves the roster empty
        runtime.block_on(load_initial_people(relationships.as_ref(), &mut state));

        Self {
            relationships,
            state,
            radial_view: RadialView::new(),
            active_area: None,
            popup_position: NodePos { x: 50.0, y: 50.0 },
            show_add_reminder_form: false,
            reminder_editor: ReminderEditor::new(),
            show_add_person_prompt: false,
            new_person_name: String::new(),
            runtime,
        }
    }

    fn handle_area_event(&mut self, event: AreaEvent) {
        match event {
            AreaEvent::AreaClicked { label, position } => {
                if self.active_area.as_deref() == Some(label.as_str()) {
                    self.active_area = None;
                } else {
                    self.popup_position = NodePos {
                        x: position.x.clamp(5.0, 95.0),
                        y: position.y.clamp(5.0, 95.0),
                    };
                    self.active_area = Some(label);
                }
                self.show_add_reminder_form = false;
            }
            AreaEvent::AddPersonClicked => {
                self.show_add_person_prompt = true;
            }
        }
    }

    fn show_area_popup(&mut self, ctx: &Context) {
        let Some(area) = self.active_area.clone() else { return };
        let screen = ctx.screen_rect();
        let pos = egui::pos2(
            screen.left() + screen.width() * self.popup_position.x as f32 / 100.0,
            screen.top() + screen.height() * self.popup_position.y as f32 / 100.0,
        );

        let mut open = true;
        egui::Window::new(area.as_str())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_pos(pos)
            .show(ctx, |ui| {
                self.show_popup_contents(ui, &area);
            });
        if !open {
            self.active_area = None;
        }
    }

    fn show_popup_contents(&mut self, ui: &mut egui::Ui, area: &str) {
        if self.show_add_reminder_form {
            if let Some(action) = self.reminder_editor.show(ui) {
                match action {
                    EditorAction::Added(draft) => {
                        let mut reminder = Reminder::new(draft.text, area);
                        reminder.date = draft.date;
                        reminder.priority = draft.priority;
                        if let Err(error) = self.state.add_reminder(reminder) {
                            warn!(%error, "could not add reminder");
                        }
                        self.show_add_reminder_form = false;
                    }
                    EditorAction::Cancelled => self.show_add_reminder_form = false,
                }
            }
        } else if ui.button("+ Add Reminder").clicked() {
            self.show_add_reminder_form = true;
        }
        ui.separator();

        let reminders = self.state.reminders_for(area).to_vec();
        if reminders.is_empty() {
            ui.label(RichText::new("No reminders yet").weak());
        }
        for reminder in &reminders {
            ui.horizontal(|ui| {
                let mut completed = reminder.completed;
                if ui.checkbox(&mut completed, "").changed() {
                    self.state.toggle_completed(area, reminder.id);
                }

                let text = if reminder.completed {
                    RichText::new(&reminder.text).strikethrough().weak()
                } else {
                    RichText::new(&reminder.text)
                };
                let handle = ui.add(egui::Label::new(text).sense(egui::Sense::click_and_drag()));
                if handle.drag_started() {
                    self.radial_view.start_drag(reminder.id, area);
                }

                if reminder.priority == Priority::High {
                    ui.colored_label(Color32::RED, "!");
                }
                if ui.small_button("x").clicked() {
                    self.state.delete_reminder(area, reminder.id);
                }
            });
            if let Some(date) = reminder.date {
                ui.small(format!("due {date}"));
            }
        }

        if area == RELATIONSHIPS && !self.state.people.is_empty() {
            ui.separator();
            ui.label(RichText::new("People").strong());
            let people = self.state.people.clone();
            for person in people {
                ui.horizontal(|ui| {
                    ui.label(&person);
                    if ui.small_button("x").clicked() {
                        self.state.remove_person(&person);
                    }
                });
            }
        }
    }

    fn show_add_person_window(&mut self, ctx: &Context) {
        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("Add person")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(egui::TextEdit::singleline(&mut self.new_person_name).hint_text("Name"));
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            let name = self.new_person_name.trim().to_string();
            if !name.is_empty() {
                self.add_person(&name);
            }
            self.new_person_name.clear();
            self.show_add_person_prompt = false;
        } else if cancelled {
            self.new_person_name.clear();
            self.show_add_person_prompt = false;
        }
    }

    fn add_person(&mut self, name: &str) {
        let provider = self.relationships.clone();
        match self.runtime.block_on(provider.add_person(name)) {
            Ok(people) => self.state.set_people(people),
            Err(error) => warn!(%error, "failed to add person; roster unchanged"),
        }
    }
}

impl eframe::App for LifeMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading("Life Areas Management"));
        });
        egui::TopBottomPanel::bottom("hint").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("Click on any life area to view and manage tasks")
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let events = self.radial_view.show(ui, &mut self.state);
            for event in events {
                self.handle_area_event(event);
            }
        });

        if self.active_area.is_some() {
            self.show_area_popup(ctx);
        }
        if self.show_add_person_prompt {
            self.show_add_person_window(ctx);
        }
    }
}
