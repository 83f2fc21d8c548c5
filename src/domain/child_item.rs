use serde::{Deserialize, Serialize};

use super::category::display_label;
use super::reminder::Reminder;

/// Anything displayed around a life-area node. The explicit tag lets
/// rendering and paging dispatch without probing for task fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChildItem {
    Subnode(String),
    Task(Reminder),
    Person(String),
}

impl ChildItem {
    pub fn display_label(&self) -> &str {
        match self {
            ChildItem::Subnode(label) => display_label(label),
            ChildItem::Task(reminder) => display_label(&reminder.text),
            ChildItem::Person(name) => display_label(name),
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, ChildItem::Person(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_per_variant() {
        assert_eq!(ChildItem::Subnode("Project A".into()).display_label(), "Project A");
        assert_eq!(ChildItem::Person("Mom".into()).display_label(), "Mom");
        let reminder = Reminder::new("Do laundry", "Home");
        assert_eq!(ChildItem::Task(reminder).display_label(), "Do laundry");
    }

    #[test]
    fn test_blank_label_gets_placeholder() {
        assert_eq!(ChildItem::Subnode("  ".into()).display_label(), "Unlabeled");
        assert_eq!(ChildItem::Person(String::new()).display_label(), "Unlabeled");
    }
}
