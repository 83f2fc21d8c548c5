use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::category::{self, AREA_LABELS, RELATIONSHIPS};
use super::child_item::ChildItem;
use super::reminder::{Priority, Reminder};

#[derive(Error, Debug, PartialEq)]
pub enum StateError {
    #[error("Unknown life area: {label}")]
    UnknownArea { label: String },

    #[error("Duplicate reminder id: {id}")]
    DuplicateReminder { id: Uuid },
}

/// The single logical store behind the radial view: child items and reminders
/// keyed by life-area label, plus the Relationships roster. Every mutation
/// goes through a method here, so the ownership invariant (a reminder lives
/// in exactly one area's list) is enforced in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub subnodes: HashMap<String, Vec<String>>,
    pub reminders: HashMap<String, Vec<Reminder>>,
    pub people: Vec<String>,
}

impl AppState {
    /// Empty store with one (empty) list per fixed life area.
    pub fn new() -> Self {
        let mut subnodes = HashMap::new();
        let mut reminders = HashMap::new();
        for label in AREA_LABELS {
            subnodes.insert(label.to_string(), Vec::new());
            reminders.insert(label.to_string(), Vec::new());
        }
        Self {
            subnodes,
            reminders,
            people: Vec::new(),
        }
    }

    /// Store pre-populated with the sample data the app starts with.
    pub fn sample() -> Self {
        let mut state = Self::new();

        let samples: [(&str, &[&str]); 6] = [
            ("Work", &["Project A", "Project B", "Project C", "Meeting X", "Client Y", "Task Z"]),
            ("Health", &["Exercise", "Diet", "Sleep", "Meditation"]),
            ("Hobbies", &["Guitar", "Painting", "Reading", "Photography", "Hiking", "Cooking"]),
            ("Finance", &["Budget", "Investments", "Savings", "Bills"]),
            ("Growth", &["Course A", "Book B", "Skill C", "Language D"]),
            ("Home", &["Cleaning", "Renovation", "Garden", "Maintenance"]),
        ];
        for (area, items) in samples {
            if let Some(list) = state.subnodes.get_mut(area) {
                list.extend(items.iter().map(|s| s.to_string()));
            }
        }

        let d = NaiveDate::from_ymd_opt;
        let seeds = [
            ("Work", "Team meeting at 10am", d(2025, 5, 15), false, Priority::Medium),
            ("Work", "Submit monthly report", d(2025, 5, 18), true, Priority::High),
            ("Health", "Yoga class at 6pm", d(2025, 5, 13), false, Priority::Low),
            ("Health", "Take vitamins", d(2025, 5, 12), false, Priority::Medium),
            ("Relationships", "Call mom", d(2025, 5, 14), false, Priority::Medium),
            ("Relationships", "Date night on Friday", d(2025, 5, 17), false, Priority::High),
            ("Hobbies", "Guitar practice", d(2025, 5, 12), true, Priority::Low),
            ("Hobbies", "Paint landscape", d(2025, 5, 16), false, Priority::Medium),
            ("Finance", "Pay electricity bill", d(2025, 5, 15), false, Priority::High),
            ("Finance", "Check budget", d(2025, 5, 20), false, Priority::Medium),
            ("Growth", "Read 10 pages", d(2025, 5, 12), true, Priority::Medium),
            ("Growth", "Watch TED talk", d(2025, 5, 13), false, Priority::Low),
            ("Home", "Do laundry", d(2025, 5, 12), false, Priority::Medium),
            ("Home", "Fix kitchen faucet", d(2025, 5, 19), false, Priority::High),
        ];
        for (area, text, date, completed, priority) in seeds {
            let mut reminder = Reminder::new(text, area).with_priority(priority);
            reminder.date = date;
            reminder.completed = completed;
            if let Some(list) = state.reminders.get_mut(area) {
                list.push(reminder);
            }
        }

        state
    }

    /// Child items fanned out around an area node. Relationships shows the
    /// people roster; every other area shows its plain subnodes.
    pub fn child_items(&self, area: &str) -> Vec<ChildItem> {
        if area == RELATIONSHIPS {
            self.people.iter().cloned().map(ChildItem::Person).collect()
        } else {
            self.subnodes
                .get(area)
                .map(|items| items.iter().cloned().map(ChildItem::Subnode).collect())
                .unwrap_or_default()
        }
    }

    pub fn reminders_for(&self, area: &str) -> &[Reminder] {
        self.reminders.get(area).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn add_reminder(&mut self, reminder: Reminder) -> Result<(), StateError> {
        if self.find_reminder(reminder.id).is_some() {
            return Err(StateError::DuplicateReminder { id: reminder.id });
        }
        let area = reminder.category_id.clone();
        self.reminders
            .get_mut(&area)
            .ok_or_else(|| StateError::UnknownArea { label: area })?
            .push(reminder);
        Ok(())
    }

    pub fn delete_reminder(&mut self, area: &str, id: Uuid) -> bool {
        if let Some(list) = self.reminders.get_mut(area) {
            let before = list.len();
            list.retain(|r| r.id != id);
            return list.len() < before;
        }
        false
    }

    pub fn toggle_completed(&mut self, area: &str, id: Uuid) -> bool {
        if let Some(reminder) = self
            .reminders
            .get_mut(area)
            .and_then(|list| list.iter_mut().find(|r| r.id == id))
        {
            reminder.toggle_completed();
            return true;
        }
        false
    }

    /// Moves a reminder between areas as one atomic step: it is removed from
    /// the source list and appended to the target list within the same call,
    /// so no caller ever observes the reminder in zero or two areas.
    ///
    /// Returns `Ok(false)` when nothing changed: same source and target, or
    /// the reminder is no longer in the source list (it may have been deleted
    /// while the drag was in flight).
    pub fn move_reminder(&mut self, id: Uuid, from: &str, to: &str) -> Result<bool, StateError> {
        if !category::is_known_area(from) {
            return Err(StateError::UnknownArea { label: from.to_string() });
        }
        if !category::is_known_area(to) {
            return Err(StateError::UnknownArea { label: to.to_string() });
        }
        if from == to {
            return Ok(false);
        }
        // Target list must exist before the reminder leaves the source list,
        // otherwise a failed insert would orphan it.
        if !self.reminders.contains_key(to) {
            return Err(StateError::UnknownArea { label: to.to_string() });
        }

        let source = match self.reminders.get_mut(from) {
            Some(list) => list,
            None => return Ok(false),
        };
        let index = match source.iter().position(|r| r.id == id) {
            Some(index) => index,
            None => {
                debug!(reminder_id = %id, from, "reminder vanished before drop; skipping");
                return Ok(false);
            }
        };
        let mut reminder = source.remove(index);
        reminder.category_id = to.to_string();
        if let Some(target) = self.reminders.get_mut(to) {
            target.push(reminder);
        }
        Ok(true)
    }

    /// Area currently owning the reminder, if any.
    pub fn find_reminder(&self, id: Uuid) -> Option<(&str, &Reminder)> {
        for (area, list) in &self.reminders {
            if let Some(reminder) = list.iter().find(|r| r.id == id) {
                return Some((area.as_str(), reminder));
            }
        }
        None
    }

    pub fn set_people(&mut self, people: Vec<String>) {
        self.people = people;
    }

    pub fn remove_person(&mut self, name: &str) {
        self.people.retain(|p| p != name);
    }
}
