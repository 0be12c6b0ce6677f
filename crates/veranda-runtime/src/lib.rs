//! Veranda Runtime - Simulated browser platform
//!
//! Deterministic stand-ins for the browser services the page behaviors
//! run against: an event model with an id-keyed listener registry, a
//! window with scroll and resize state, a cancellable timer queue on a
//! logical clock, intersection observers, a civil-date clock, and the
//! dialog/console channels.

mod clock;
mod console;
mod dialog;
mod event;
mod listeners;
mod observer;
mod timers;
mod window;

pub use clock::{CivilDate, Clock};
pub use console::Console;
pub use dialog::DialogQueue;
pub use event::{Event, EventKind};
pub use listeners::{Binding, BindingId, BindingTarget, EventListeners};
pub use observer::{IntersectionEntry, IntersectionObserver, RootMargin, RootMarginError};
pub use timers::{TimerHandle, TimerQueue};
pub use window::Window;
