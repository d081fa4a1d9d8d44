//! Transient notifications.

pub mod toast;

pub use toast::{Toast, ToastId, ToastKind, ToastState};
