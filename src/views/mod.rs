//! Mounted pages.
//!
//! A view lives from the moment its route is navigated to until the visitor
//! leaves. Views that schedule work own a [`TimerSet`](crate::timers::TimerSet),
//! so dropping the view stops everything it started.

pub mod contact;
pub mod home;
pub mod services;

pub use contact::{ContactView, ContactViewState, SubmitReport, DELIVERY_FAILED_MESSAGE};
pub use home::HomeView;
pub use services::ServicesView;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock shared view state, recovering it if a timer task panicked while
/// holding the lock.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
