//! Eventing - Controller to View Notifications

pub mod screen_event;

pub use screen_event::ScreenEvent;
