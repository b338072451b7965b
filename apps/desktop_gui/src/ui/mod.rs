//! UI layer: app shell, screens, and modal forms.

pub mod app;
pub mod forms;
