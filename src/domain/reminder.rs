use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reminder {
    pub id: Uuid,
    pub text: String,
    pub date: Option<NaiveDate>,
    pub completed: bool,
    pub priority: Priority,
    /// Label of the life area that currently owns this reminder. Rewritten
    /// when the reminder is reassigned by drag-and-drop.
    pub category_id: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Reminder {
    pub fn new(text: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            date: None,
            completed: false,
            priority: Priority::Medium,
            category_id: category_id.into(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reminder_defaults() {
        let reminder = Reminder::new("Team meeting at 10am", "Work");
        assert_eq!(reminder.text, "Team meeting at 10am");
        assert_eq!(reminder.category_id, "Work");
        assert_eq!(reminder.priority, Priority::Medium);
        assert!(!reminder.completed);
        assert!(reminder.date.is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
        let reminder = Reminder::new("Pay electricity bill", "Finance")
            .with_date(date)
            .with_priority(Priority::High);
        assert_eq!(reminder.date, Some(date));
        assert_eq!(reminder.priority, Priority::High);
    }

    #[test]
    fn test_toggle_completed() {
        let mut reminder = Reminder::new("Guitar practice", "Hobbies");
        reminder.toggle_completed();
        assert!(reminder.completed);
        reminder.toggle_completed();
        assert!(!reminder.completed);
    }

    #[test]
    fn test_reminder_serializes() {
        let reminder = Reminder::new("Call mom", "Relationships");
        let json = serde_json::to_string(&reminder).unwrap();
        let back: Reminder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reminder);
    }
}
