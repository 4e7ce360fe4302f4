//! Single-slot toast notifications.
//!
//! Showing a toast replaces whatever is on screen. Each toast walks through
//! `Entering -> Visible -> Leaving` and is then removed; timer callbacks carry
//! the toast id so that callbacks of a replaced toast cannot touch its
//! successor.

use crate::config::ToastTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "#059669",
            ToastKind::Error => "#dc2626",
            ToastKind::Info => "#2563eb",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "notification-success",
            ToastKind::Error => "notification-error",
            ToastKind::Info => "notification-info",
        }
    }
}

/// A message to show, before it has been given a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    pub fn transform(&self) -> &'static str {
        match self {
            ToastPhase::Visible => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(400px)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
    pub phase: ToastPhase,
}

/// Lifecycle step a timer fires for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Show,
    Hide,
    Remove,
}

/// Delays, measured from mount, at which each step fires.
pub fn schedule(timings: &ToastTimings) -> [(u32, ToastStep); 3] {
    [
        (timings.enter_ms, ToastStep::Show),
        (timings.visible_ms, ToastStep::Hide),
        (
            timings.visible_ms.saturating_add(timings.exit_ms),
            ToastStep::Remove,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    last_id: u64,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, notice: Notice) -> ToastId {
        self.last_id += 1;
        let id = ToastId(self.last_id);
        if let Some(previous) = self.current.take() {
            log::debug!("Toast {:?} replaced by {:?}", previous.id, id);
        }
        self.current = Some(Toast {
            id,
            notice,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Applies `step` to toast `id`. Returns false when `id` is no longer on
    /// screen.
    pub fn apply(&mut self, id: ToastId, step: ToastStep) -> bool {
        if self.current.as_ref().map(|toast| toast.id) != Some(id) {
            return false;
        }
        let phase = match step {
            ToastStep::Show => ToastPhase::Visible,
            ToastStep::Hide => ToastPhase::Leaving,
            ToastStep::Remove => {
                self.current = None;
                return true;
            }
        };
        if let Some(toast) = self.current.as_mut() {
            toast.phase = phase;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_the_lifecycle() {
        let mut slot = ToastSlot::default();
        let id = slot.show(Notice::success("Saved"));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Entering);

        assert!(slot.apply(id, ToastStep::Show));
        assert_eq!(slot.current().unwrap().phase.transform(), "translateX(0)");
        assert!(slot.apply(id, ToastStep::Hide));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);
        assert!(slot.apply(id, ToastStep::Remove));
        assert!(slot.current().is_none());
    }

    #[test]
    fn new_toast_replaces_the_old_one() {
        let mut slot = ToastSlot::default();
        let first = slot.show(Notice::info("one"));
        let second = slot.show(Notice::error("two"));

        assert_ne!(first, second);
        assert_eq!(slot.current().unwrap().notice.message, "two");
        // timers of the replaced toast are inert
        assert!(!slot.apply(first, ToastStep::Remove));
        assert_eq!(slot.current().unwrap().id, second);
    }

    #[test]
    fn default_schedule_matches_page_timings() {
        assert_eq!(
            schedule(&ToastTimings::default()),
            [
                (100, ToastStep::Show),
                (4000, ToastStep::Hide),
                (4300, ToastStep::Remove)
            ]
        );
    }

    #[test]
    fn removal_time_saturates_instead_of_overflowing() {
        let timings = ToastTimings {
            enter_ms: 100,
            visible_ms: u32::MAX,
            exit_ms: 300,
        };
        let steps = schedule(&timings);
        assert_eq!(steps[1], (u32::MAX, ToastStep::Hide));
        assert_eq!(steps[2], (u32::MAX, ToastStep::Remove));
    }

    #[test]
    fn kinds_have_distinct_colors() {
        assert_eq!(ToastKind::Success.background(), "#059669");
        assert_eq!(ToastKind::Error.background(), "#dc2626");
        assert_eq!(ToastKind::default().background(), "#2563eb");
    }
}
