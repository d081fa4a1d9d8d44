//! Toast notification state.
//!
//! A toast is a transient status banner. Every toast gets a fresh id so the
//! expiry timer scheduled for one toast can never hide a newer one.

use serde::Serialize;

/// Monotonically increasing toast identifier.
pub type ToastId = u64;

/// Visual kind of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A status banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
}

/// Holds the current toast, if any, and allocates ids.
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    next_id: ToastId,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing whatever is on screen, and return its id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            visible: true,
            message: message.into(),
            kind,
        });
        id
    }

    /// Hide the current toast immediately.
    pub fn dismiss(&mut self) {
        if let Some(toast) = self.current.as_mut() {
            toast.visible = false;
        }
    }

    /// Expiry callback for the toast `id`.
    ///
    /// Hides the toast only if it is still the current one. Returns whether
    /// anything was hidden.
    pub fn expire(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.visible => {
                toast.visible = false;
                true
            }
            _ => false,
        }
    }

    /// The toast currently on screen.
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref().filter(|t| t.visible)
    }

    /// The most recent toast, shown or hidden.
    pub fn latest(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_allocates_increasing_ids() {
        let mut state = ToastState::new();
        let first = state.show("one", ToastKind::Success);
        let second = state.show("two", ToastKind::Error);
        assert!(second > first);

        let toast = state.visible().unwrap();
        assert_eq!(toast.message, "two");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn test_expire_hides_current_toast() {
        let mut state = ToastState::new();
        let id = state.show("sent", ToastKind::Success);
        assert!(state.expire(id));
        assert!(state.visible().is_none());
        assert_eq!(state.latest().map(|t| t.id), Some(id));
    }

    #[test]
    fn test_stale_expiry_does_not_hide_newer_toast() {
        let mut state = ToastState::new();
        let old = state.show("first", ToastKind::Success);
        let new = state.show("second", ToastKind::Success);

        assert!(!state.expire(old));
        assert_eq!(state.visible().map(|t| t.id), Some(new));
    }

    #[test]
    fn test_dismiss_then_expire_is_harmless() {
        let mut state = ToastState::new();
        let id = state.show("sent", ToastKind::Success);
        state.dismiss();
        assert!(state.visible().is_none());
        assert!(!state.expire(id));
        assert!(state.visible().is_none());
    }

    #[test]
    fn test_dismiss_without_toast() {
        let mut state = ToastState::new();
        state.dismiss();
        assert!(state.latest().is_none());
    }
}
