use chrono::NaiveDate;
use eframe::egui::{self, Ui};

use crate::domain::reminder::Priority;

/// A filled-in add-reminder form, ready to become a `Reminder`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDraft {
    pub text: String,
    pub date: Option<NaiveDate>,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Added(ReminderDraft),
    Cancelled,
}

/// The add-reminder form inside the area popup: text, optional date,
/// priority picker.
pub struct ReminderEditor {
    pub text: String,
    pub date_input: String,
    pub priority: Priority,
}

impl Default for ReminderEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderEditor {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            date_input: String::new(),
            priority: Priority::Medium,
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.date_input.clear();
        self.priority = Priority::Medium;
    }

    /// Parses the date field; anything that is not YYYY-MM-DD means "no date".
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_input.trim(), "%Y-%m-%d").ok()
    }

    /// A draft is only produced for non-blank text.
    pub fn draft(&self) -> Option<ReminderDraft> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(ReminderDraft {
            text: text.to_string(),
            date: self.parsed_date(),
            priority: self.priority,
        })
    }

    pub fn show(&mut self, ui: &mut Ui) -> Option<EditorAction> {
        let mut action = None;

        ui.add(egui::TextEdit::singleline(&mut self.text).hint_text("What do you need to do?"));
        ui.add(egui::TextEdit::singleline(&mut self.date_input).hint_text("YYYY-MM-DD"));

        ui.horizontal(|ui| {
            ui.label("Priority:");
            ui.selectable_value(&mut self.priority, Priority::Low, "Low");
            ui.selectable_value(&mut self.priority, Priority::Medium, "Medium");
            ui.selectable_value(&mut self.priority, Priority::High, "High");
        });

        ui.horizontal(|ui| {
            if ui.button("Add").clicked() {
                if let Some(draft) = self.draft() {
                    self.clear();
                    action = Some(EditorAction::Added(draft));
                }
            }
            if ui.button("Cancel").clicked() {
                self.clear();
                action = Some(EditorAction::Cancelled);
            }
        });

        action
    }
}
