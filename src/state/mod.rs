// State management module.
// Handles data loading, notifications, and UI state for tabs.

#![allow(dead_code)]

pub mod catalog;
pub mod console;
pub mod notify;

pub use catalog::{LoadingState, SelectableList};
pub use console::{ConsoleLevel, ConsoleMessage};
#[allow(unused_imports)]
pub use notify::{LONG_MESSAGE, Notifier, Popup, SHORT_MESSAGE, Toast};
