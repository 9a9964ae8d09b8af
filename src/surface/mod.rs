//! Host-facing surfaces: rendering and notifications.
//!
//! Both contracts come with a null implementation for headless use and a
//! recording implementation for tests.

pub mod display;
pub mod notify;

pub use display::{DisplaySurface, NullDisplay, RecordingDisplay};
pub use notify::{NotificationSurface, NullNotifier, RecordingNotifier};
