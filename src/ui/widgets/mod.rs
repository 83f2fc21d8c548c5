pub mod reminder_editor;
